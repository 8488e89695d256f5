use serde::{Deserialize, Serialize};

/// Public view of a user account.
///
/// Deliberately omits `password` and `is_active`.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}
