use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request.
///
/// The status code is echoed in the body alongside the HTTP status.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub message: String,
    /// The HTTP status code
    pub status_code: u16,
}

/// Plain confirmation message for successful mutations without a payload.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    pub message: String,
}
