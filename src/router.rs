//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at
//! `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// # Registered Endpoints
/// - `GET /people`, `GET /people/{person_id}` - people reference data
/// - `GET /planets`, `GET /planets/{planet_id}` - planet reference data
/// - `GET /users` - all user accounts
/// - `GET /users/favorites` - favorites of the current user
/// - `POST | DELETE /favorite/planet/{planet_id}` - link/unlink a planet
/// - `POST | DELETE /favorite/people/{person_id}` - link/unlink a person
///
/// The OpenAPI document is served at `/api/docs/openapi.json` and Swagger UI
/// at `/api/docs`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Star Wars reference data and favorites API"), tags(
        (name = controller::people::PEOPLE_TAG, description = "People reference data"),
        (name = controller::planet::PLANET_TAG, description = "Planet reference data"),
        (name = controller::user::USER_TAG, description = "User accounts and their favorites"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite management"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::people::get_all_people))
        .routes(routes!(controller::people::get_single_person))
        .routes(routes!(controller::planet::get_all_planets))
        .routes(routes!(controller::planet::get_single_planet))
        .routes(routes!(controller::user::get_all_users))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::delete_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_person,
            controller::favorite::delete_favorite_person
        ))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
