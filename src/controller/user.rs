use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    controller::util::resolve_current_user,
    data::user::UserRepository,
    error::Error,
    model::{api::ErrorDto, app::AppState, favorite::FavoriteDto, user::UserDto},
    service::favorite::FavoriteService,
};

pub static USER_TAG: &str = "users";

/// Get all users
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All user accounts", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserRepository::new(&state.db).get_all().await?;

    let user_dtos: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();

    Ok((StatusCode::OK, Json(user_dtos)))
}

/// Get all favorites of the current user
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Favorites of the current user", body = Vec<FavoriteDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let user = resolve_current_user(&state).await?;

    let favorites = FavoriteService::new(&state.db).list_favorites(user.id).await?;

    Ok((StatusCode::OK, Json(favorites)))
}
