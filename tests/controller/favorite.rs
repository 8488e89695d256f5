//! Tests for the favorite endpoints.
//!
//! Covers the add/remove contract end to end: creation status codes,
//! duplicate rejection, the deliberately non-idempotent delete, and the
//! serialized favorite shape.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::controller::{
    favorite::{
        add_favorite_person, add_favorite_planet, delete_favorite_person, delete_favorite_planet,
    },
    user::get_user_favorites,
};
use holocron_test_utils::prelude::*;
use serde_json::Value;

use super::read_json;

/// Expect 201 with only the planet key populated
#[tokio::test]
async fn add_planet_favorite_created() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_core_tables()
        .with_user("leia@alderaan.gov")
        .build()
        .await?;
    let planet = test.insert_mock_planet(1).await?;

    let result = add_favorite_planet(State(test.to_app_state()), Path(planet.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = read_json(resp).await;
    assert_eq!(body["planet_id"], planet.id);
    assert_eq!(body["people_id"], Value::Null);

    Ok(())
}

/// Expect 201 with only the person key populated
#[tokio::test]
async fn add_person_favorite_created() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_core_tables()
        .with_user("leia@alderaan.gov")
        .build()
        .await?;
    let person = test.insert_mock_person(1).await?;

    let result = add_favorite_person(State(test.to_app_state()), Path(person.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = read_json(resp).await;
    assert_eq!(body["people_id"], person.id);
    assert_eq!(body["planet_id"], Value::Null);

    Ok(())
}

/// Expect the first add to return 201 and the second 400
#[tokio::test]
async fn duplicate_planet_favorite_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_core_tables()
        .with_user("leia@alderaan.gov")
        .build()
        .await?;
    let planet = test.insert_mock_planet(1).await?;

    let first = add_favorite_planet(State(test.to_app_state()), Path(planet.id)).await;
    assert!(first.is_ok());
    assert_eq!(
        first.unwrap().into_response().status(),
        StatusCode::CREATED
    );

    let second = add_favorite_planet(State(test.to_app_state()), Path(planet.id)).await;
    assert!(second.is_err());
    let resp = second.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = read_json(resp).await;
    assert_eq!(body["message"], "Planet already in favorites");
    assert_eq!(body["status_code"], 400);

    Ok(())
}

/// Expect 404 and no favorite row created for a non-existent person
#[tokio::test]
async fn add_missing_person_creates_no_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_core_tables()
        .with_user("leia@alderaan.gov")
        .build()
        .await?;

    let missing_person_id = 42;
    let result = add_favorite_person(State(test.to_app_state()), Path(missing_person_id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = read_json(resp).await;
    assert_eq!(body["message"], "People not found");

    // The failed add must not have left a row behind
    let favorites = get_user_favorites(State(test.to_app_state())).await;
    let body = read_json(favorites.unwrap().into_response()).await;
    assert!(body.as_array().unwrap().is_empty());

    Ok(())
}

/// Expect 404 when deleting a favorite that was never added
#[tokio::test]
async fn delete_never_added_favorite_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_core_tables()
        .with_user("leia@alderaan.gov")
        .build()
        .await?;
    let planet = test.insert_mock_planet(1).await?;

    let result = delete_favorite_planet(State(test.to_app_state()), Path(planet.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = read_json(resp).await;
    assert_eq!(body["message"], "Favorite not found");

    Ok(())
}

/// Expect a repeated delete to return 404; delete is not idempotent
#[tokio::test]
async fn second_delete_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_core_tables()
        .with_user("leia@alderaan.gov")
        .build()
        .await?;
    let person = test.insert_mock_person(1).await?;

    let added = add_favorite_person(State(test.to_app_state()), Path(person.id)).await;
    assert!(added.is_ok());

    let first = delete_favorite_person(State(test.to_app_state()), Path(person.id)).await;
    assert!(first.is_ok());
    let resp = first.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    assert_eq!(body["message"], "Favorite people deleted successfully");

    let second = delete_favorite_person(State(test.to_app_state()), Path(person.id)).await;
    assert!(second.is_err());
    assert_eq!(
        second.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect 404 for every favorites operation when no users exist
#[tokio::test]
async fn not_found_without_current_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let planet = test.insert_mock_planet(1).await?;

    let result = add_favorite_planet(State(test.to_app_state()), Path(planet.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = read_json(resp).await;
    assert_eq!(body["message"], "User not found");

    Ok(())
}

/// Full add-list-delete-list round trip against a seeded planet
#[tokio::test]
async fn planet_favorite_lifecycle() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_core_tables()
        .with_user("leia@alderaan.gov")
        .build()
        .await?;
    let planet = test.insert_planet(1, "Tatooine").await?;

    let added = add_favorite_planet(State(test.to_app_state()), Path(planet.id)).await;
    assert!(added.is_ok());
    let resp = added.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created = read_json(resp).await;
    assert_eq!(created["planet_id"], planet.id);
    assert_eq!(created["people_id"], Value::Null);

    let listed = get_user_favorites(State(test.to_app_state())).await;
    let body = read_json(listed.unwrap().into_response()).await;
    let favorites = body.as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0], created);

    let deleted = delete_favorite_planet(State(test.to_app_state()), Path(planet.id)).await;
    assert!(deleted.is_ok());
    assert_eq!(deleted.unwrap().into_response().status(), StatusCode::OK);

    let listed_again = get_user_favorites(State(test.to_app_state())).await;
    let body = read_json(listed_again.unwrap().into_response()).await;
    assert!(body.as_array().unwrap().is_empty());

    Ok(())
}
