use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::util::resolve_current_user,
    error::Error,
    model::{
        api::{ErrorDto, MessageDto},
        app::AppState,
        favorite::{FavoriteDto, FavoriteTarget},
    },
    service::favorite::FavoriteService,
};

pub static FAVORITE_TAG: &str = "favorites";

/// Add a planet to the current user's favorites
#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "Database id of the planet")
    ),
    responses(
        (status = 201, description = "Favorite created", body = FavoriteDto),
        (status = 400, description = "Planet already in favorites", body = ErrorDto),
        (status = 404, description = "Planet or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = resolve_current_user(&state).await?;

    let favorite = FavoriteService::new(&state.db)
        .add_favorite(user.id, FavoriteTarget::Planet(planet_id))
        .await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// Remove a planet from the current user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "Database id of the planet")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 404, description = "Favorite or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = resolve_current_user(&state).await?;

    FavoriteService::new(&state.db)
        .remove_favorite(user.id, FavoriteTarget::Planet(planet_id))
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Favorite planet deleted successfully".to_string(),
        }),
    ))
}

/// Add a person to the current user's favorites
#[utoipa::path(
    post,
    path = "/favorite/people/{person_id}",
    tag = FAVORITE_TAG,
    params(
        ("person_id" = i32, Path, description = "Database id of the person")
    ),
    responses(
        (status = 201, description = "Favorite created", body = FavoriteDto),
        (status = 400, description = "Person already in favorites", body = ErrorDto),
        (status = 404, description = "Person or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_person(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = resolve_current_user(&state).await?;

    let favorite = FavoriteService::new(&state.db)
        .add_favorite(user.id, FavoriteTarget::Person(person_id))
        .await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// Remove a person from the current user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/people/{person_id}",
    tag = FAVORITE_TAG,
    params(
        ("person_id" = i32, Path, description = "Database id of the person")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 404, description = "Favorite or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_person(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = resolve_current_user(&state).await?;

    FavoriteService::new(&state.db)
        .remove_favorite(user.id, FavoriteTarget::Person(person_id))
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Favorite people deleted successfully".to_string(),
        }),
    ))
}
