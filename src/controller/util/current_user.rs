use crate::{
    data::user::UserRepository,
    error::{api::ApiError, Error},
    model::app::AppState,
};

/// Resolves the acting user as the first user row in storage.
///
/// Not a real identity mechanism: every request acts on behalf of the same
/// arbitrary account. Below this function identity is always an explicit
/// `user_id` parameter, so real authentication only has to replace this one
/// call site.
///
/// # Returns
/// - `Ok(Model)`: The first user by id
/// - `Err(Error::ApiError(ApiError::UserNotFound))`: The user table is empty
/// - `Err(Error::DbErr(_))`: Database failure
// TODO: resolve the user from a session or auth token once an auth layer exists
pub async fn resolve_current_user(state: &AppState) -> Result<entity::user::Model, Error> {
    let user = UserRepository::new(&state.db)
        .get_first()
        .await?
        .ok_or(ApiError::UserNotFound)?;

    Ok(user)
}
