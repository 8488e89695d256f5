mod favorite;
mod people;
mod planet;
mod user;

use axum::response::Response;

/// Read a response body and deserialize it as JSON.
pub async fn read_json(resp: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
