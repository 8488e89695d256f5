use sea_orm::{
    sea_query::SimpleExpr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, QueryFilter,
};

use crate::model::favorite::FavoriteTarget;

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a favorite row linking a user to the target.
    ///
    /// Only the foreign key matching the target kind is populated. The
    /// composite unique indexes on (user_id, people_id) and
    /// (user_id, planet_id) reject duplicates at the storage layer; callers
    /// see that as a unique-constraint [`DbErr`].
    pub async fn create(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<entity::favorite::Model, DbErr> {
        let (people_id, planet_id) = match target {
            FavoriteTarget::Person(person_id) => (Some(person_id), None),
            FavoriteTarget::Planet(planet_id) => (None, Some(planet_id)),
        };

        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            people_id: ActiveValue::Set(people_id),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn get_by_user_and_target(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(target_condition(target))
            .one(self.db)
            .await
    }

    /// Gets all favorite rows for the provided user ID
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Delete the favorite row matching (user, target).
    ///
    /// Returns OK regardless of the row existing; check
    /// [`DeleteResult::rows_affected`] for the outcome.
    pub async fn delete_by_user_and_target(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(target_condition(target))
            .exec(self.db)
            .await
    }
}

fn target_condition(target: FavoriteTarget) -> SimpleExpr {
    match target {
        FavoriteTarget::Person(person_id) => entity::favorite::Column::PeopleId.eq(person_id),
        FavoriteTarget::Planet(planet_id) => entity::favorite::Column::PlanetId.eq(planet_id),
    }
}
