use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::person::PersonRepository,
    error::{api::ApiError, Error},
    model::{api::ErrorDto, app::AppState, catalog::PersonDto},
};

pub static PEOPLE_TAG: &str = "people";

/// Get all people
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "All people records", body = Vec<PersonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let people = PersonRepository::new(&state.db).get_all().await?;

    let person_dtos: Vec<PersonDto> = people.into_iter().map(PersonDto::from).collect();

    Ok((StatusCode::OK, Json(person_dtos)))
}

/// Get a single person by id
#[utoipa::path(
    get,
    path = "/people/{person_id}",
    tag = PEOPLE_TAG,
    params(
        ("person_id" = i32, Path, description = "Database id of the person")
    ),
    responses(
        (status = 200, description = "The requested person", body = PersonDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_single_person(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let person = PersonRepository::new(&state.db)
        .get(person_id)
        .await?
        .ok_or(ApiError::PersonNotFound(person_id))?;

    Ok((StatusCode::OK, Json(PersonDto::from(person))))
}
