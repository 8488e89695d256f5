use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::planet::PlanetRepository,
    error::{api::ApiError, Error},
    model::{api::ErrorDto, app::AppState, catalog::PlanetDto},
};

pub static PLANET_TAG: &str = "planets";

/// Get all planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "All planet records", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = PlanetRepository::new(&state.db).get_all().await?;

    let planet_dtos: Vec<PlanetDto> = planets.into_iter().map(PlanetDto::from).collect();

    Ok((StatusCode::OK, Json(planet_dtos)))
}

/// Get a single planet by id
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = PLANET_TAG,
    params(
        ("planet_id" = i32, Path, description = "Database id of the planet")
    ),
    responses(
        (status = 200, description = "The requested planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_single_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet = PlanetRepository::new(&state.db)
        .get(planet_id)
        .await?
        .ok_or(ApiError::PlanetNotFound(planet_id))?;

    Ok((StatusCode::OK, Json(PlanetDto::from(planet))))
}
