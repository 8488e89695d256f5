use sea_orm::{ActiveValue, EntityTrait};

use crate::{context::TestContext, error::TestError};

impl TestContext {
    /// Insert a person with a specific name, uid stringified from `uid`.
    pub async fn insert_person(
        &self,
        uid: i32,
        name: &str,
    ) -> Result<entity::person::Model, TestError> {
        Ok(entity::prelude::Person::insert(entity::person::ActiveModel {
            uid: ActiveValue::Set(uid.to_string()),
            name: ActiveValue::Set(name.to_string()),
            birth_year: ActiveValue::Set(Some("19BBY".to_string())),
            eye_color: ActiveValue::Set(Some("blue".to_string())),
            ..Default::default()
        })
        .exec_with_returning(&self.db)
        .await?)
    }

    /// Insert a person with generated test values.
    pub async fn insert_mock_person(&self, uid: i32) -> Result<entity::person::Model, TestError> {
        self.insert_person(uid, &format!("Person {uid}")).await
    }

    /// Insert a planet with a specific name, uid stringified from `uid`.
    pub async fn insert_planet(
        &self,
        uid: i32,
        name: &str,
    ) -> Result<entity::planet::Model, TestError> {
        Ok(entity::prelude::Planet::insert(entity::planet::ActiveModel {
            uid: ActiveValue::Set(uid.to_string()),
            name: ActiveValue::Set(name.to_string()),
            climate: ActiveValue::Set(Some("arid".to_string())),
            terrain: ActiveValue::Set(Some("desert".to_string())),
            ..Default::default()
        })
        .exec_with_returning(&self.db)
        .await?)
    }

    /// Insert a planet with generated test values.
    pub async fn insert_mock_planet(&self, uid: i32) -> Result<entity::planet::Model, TestError> {
        self.insert_planet(uid, &format!("Planet {uid}")).await
    }
}
