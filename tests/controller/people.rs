//! Tests for the people endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::controller::people::{get_all_people, get_single_person};
use holocron_test_utils::prelude::*;

use super::read_json;

/// Expect 200 with every inserted person in the body
#[tokio::test]
async fn lists_all_people() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_core_tables()
        .with_mock_person(1)
        .with_mock_person(2)
        .build()
        .await?;

    let result = get_all_people(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    Ok(())
}

/// Expect 200 with an empty array when no people exist
#[tokio::test]
async fn lists_empty_people() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;

    let result = get_all_people(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    assert!(body.as_array().unwrap().is_empty());

    Ok(())
}

/// Expect 200 and a body whose id equals the requested id
#[tokio::test]
async fn returns_person_for_existing_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let person = test.insert_person(1, "Luke Skywalker").await?;

    let result = get_single_person(State(test.to_app_state()), Path(person.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    assert_eq!(body["id"], person.id);
    assert_eq!(body["name"], "Luke Skywalker");

    Ok(())
}

/// Expect 404 for an id not present in storage
#[tokio::test]
async fn not_found_for_missing_person() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;

    let missing_person_id = 42;
    let result = get_single_person(State(test.to_app_state()), Path(missing_person_id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = read_json(resp).await;
    assert_eq!(body["message"], "People not found");
    assert_eq!(body["status_code"], 404);

    Ok(())
}

/// Expect 500 when required database tables don't exist
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_all_people(State(test.to_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
