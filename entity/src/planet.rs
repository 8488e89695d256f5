use sea_orm::entity::prelude::*;

/// Star Wars planet reference data, keyed by the upstream SWAPI `uid`.
///
/// `created` and `edited` carry the upstream record timestamps as opaque
/// strings; they are persisted but never serialized to API responses.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub uid: String,
    pub name: String,
    pub climate: Option<String>,
    pub created: Option<String>,
    pub diameter: Option<String>,
    pub edited: Option<String>,
    pub gravity: Option<String>,
    pub orbital_period: Option<String>,
    pub population: Option<String>,
    pub rotation_period: Option<String>,
    pub surface_water: Option<String>,
    pub terrain: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
