use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Request-level errors with a defined HTTP mapping.
///
/// Display strings are the literal response messages of the API contract;
/// variant payloads carry ids for logging only.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("User not found")]
    UserNotFound,
    #[error("People not found")]
    PersonNotFound(i32),
    #[error("Planet not found")]
    PlanetNotFound(i32),
    #[error("Favorite not found")]
    FavoriteNotFound,
    #[error("People already in favorites")]
    PersonAlreadyFavorited(i32),
    #[error("Planet already in favorites")]
    PlanetAlreadyFavorited(i32),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::PersonAlreadyFavorited(_) | Self::PlanetAlreadyFavorited(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::PersonNotFound(person_id) | Self::PersonAlreadyFavorited(person_id) => {
                tracing::debug!(person_id = %person_id, "{}", self);
            }
            Self::PlanetNotFound(planet_id) | Self::PlanetAlreadyFavorited(planet_id) => {
                tracing::debug!(planet_id = %planet_id, "{}", self);
            }
            _ => {
                tracing::debug!("{}", self);
            }
        }

        let status = self.status_code();

        (
            status,
            Json(ErrorDto {
                message: self.to_string(),
                status_code: status.as_u16(),
            }),
        )
            .into_response()
    }
}
