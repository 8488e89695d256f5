//! Tests for the user endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::controller::user::{get_all_users, get_user_favorites};
use holocron_test_utils::prelude::*;

use super::read_json;

/// Expect 200 with every user, passwords not serialized
#[tokio::test]
async fn lists_all_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_core_tables()
        .with_user("leia@alderaan.gov")
        .with_user("han@falcon.net")
        .build()
        .await?;

    let result = get_all_users(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["email"], "leia@alderaan.gov");
    assert!(users[0].get("password").is_none());

    Ok(())
}

/// Expect 200 with the current user's favorites
#[tokio::test]
async fn lists_current_user_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user = test.insert_user("leia@alderaan.gov").await?;
    let planet = test.insert_mock_planet(1).await?;
    let _ = test.insert_favorite(user.id, None, Some(planet.id)).await?;

    let result = get_user_favorites(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    let favorites = body.as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["user_id"], user.id);
    assert_eq!(favorites[0]["planet_id"], planet.id);

    Ok(())
}

/// Expect only the first user's favorites, not another user's
#[tokio::test]
async fn ignores_other_users_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let current = test.insert_user("leia@alderaan.gov").await?;
    let other = test.insert_user("han@falcon.net").await?;
    let planet = test.insert_mock_planet(1).await?;
    let _ = test.insert_favorite(other.id, None, Some(planet.id)).await?;

    let result = get_user_favorites(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    assert!(body.as_array().unwrap().is_empty());
    assert_ne!(current.id, other.id);

    Ok(())
}

/// Expect 404 when no users exist to resolve as the current user
#[tokio::test]
async fn not_found_without_current_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;

    let result = get_user_favorites(State(test.to_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = read_json(resp).await;
    assert_eq!(body["message"], "User not found");

    Ok(())
}
