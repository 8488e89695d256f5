use sea_orm::{ActiveValue, EntityTrait};

use crate::{context::TestContext, error::TestError};

impl TestContext {
    /// Insert an active user with the given email.
    pub async fn insert_user(&self, email: &str) -> Result<entity::user::Model, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            password: ActiveValue::Set("p4ssw0rd".to_string()),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        })
        .exec_with_returning(&self.db)
        .await?)
    }

    /// Insert a raw favorite row, bypassing the service-layer checks.
    ///
    /// Useful for seeding list results or for exercising the storage-level
    /// unique constraints directly.
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        people_id: Option<i32>,
        planet_id: Option<i32>,
    ) -> Result<entity::favorite::Model, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                people_id: ActiveValue::Set(people_id),
                planet_id: ActiveValue::Set(planet_id),
                ..Default::default()
            })
            .exec_with_returning(&self.db)
            .await?,
        )
    }
}
