use serde::{Deserialize, Serialize};

/// The person or planet a favorite points to.
///
/// The tagged representation makes both-set and both-null favorite rows
/// unrepresentable through the write path, even though the table keeps two
/// nullable foreign keys for the wire shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteTarget {
    Person(i32),
    Planet(i32),
}

/// Wire shape of a favorite row. Exactly one of `people_id` / `planet_id`
/// is non-null.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub people_id: Option<i32>,
    pub planet_id: Option<i32>,
}

impl From<entity::favorite::Model> for FavoriteDto {
    fn from(favorite: entity::favorite::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            people_id: favorite.people_id,
            planet_id: favorite.planet_id,
        }
    }
}
