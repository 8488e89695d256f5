//! Tests for the planet endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::controller::planet::{get_all_planets, get_single_planet};
use holocron_test_utils::prelude::*;

use super::read_json;

/// Expect 200 with every inserted planet in the body
#[tokio::test]
async fn lists_all_planets() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_core_tables()
        .with_mock_planet(1)
        .with_mock_planet(2)
        .with_mock_planet(3)
        .build()
        .await?;

    let result = get_all_planets(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 3);

    Ok(())
}

/// Expect 200 and a body whose id equals the requested id
#[tokio::test]
async fn returns_planet_for_existing_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let planet = test.insert_planet(1, "Hoth").await?;

    let result = get_single_planet(State(test.to_app_state()), Path(planet.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    assert_eq!(body["id"], planet.id);
    assert_eq!(body["name"], "Hoth");

    Ok(())
}

/// Expect the persisted created/edited record timestamps to stay out of the
/// response body
#[tokio::test]
async fn omits_record_timestamps() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let planet = test.insert_mock_planet(1).await?;

    let result = get_single_planet(State(test.to_app_state()), Path(planet.id)).await;

    assert!(result.is_ok());
    let body = read_json(result.unwrap().into_response()).await;
    assert!(body.get("created").is_none());
    assert!(body.get("edited").is_none());

    Ok(())
}

/// Expect 404 for an id not present in storage
#[tokio::test]
async fn not_found_for_missing_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;

    let missing_planet_id = 42;
    let result = get_single_planet(State(test.to_app_state()), Path(missing_planet_id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = read_json(resp).await;
    assert_eq!(body["message"], "Planet not found");
    assert_eq!(body["status_code"], 404);

    Ok(())
}
