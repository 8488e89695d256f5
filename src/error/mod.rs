//! Error types for the Holocron server application.
//!
//! All errors implement `IntoResponse` for Axum HTTP responses and use
//! `thiserror` for ergonomic error definitions. Domain errors map to the
//! 404/400 responses of the API contract; everything else falls through to a
//! logged 500 with a generic body.

pub mod api;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{api::ApiError, config::ConfigError},
    model::api::ErrorDto,
};

/// Main error type for the Holocron server application.
///
/// Aggregates the domain-specific error types and database errors into a
/// single unified type, with `#[from]` conversions enabling the `?` operator
/// throughout controllers and services.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Request-level error with a defined HTTP mapping (missing resource,
    /// duplicate favorite).
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Database error (query failures, connection issues, constraint
    /// violations not claimed by the service layer).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ApiError(err) => err.into_response(),
            Self::ConfigError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error message but returns a generic body to the client to
/// avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        let status = StatusCode::INTERNAL_SERVER_ERROR;

        (
            status,
            Json(ErrorDto {
                message: "Internal server error".to_string(),
                status_code: status.as_u16(),
            }),
        )
            .into_response()
    }
}
