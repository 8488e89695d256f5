//! Declarative test builder.
//!
//! Configuration methods queue tables and fixtures; everything is executed
//! during the final `build()` call.

use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for declarative test initialization.
///
/// Chain configuration methods together and finalize with `build()` to get a
/// [`TestContext`].
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_core_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,
    people: Vec<i32>,
    planets: Vec<i32>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_core_tables: false,
            users: Vec::new(),
            people: Vec::new(),
            planets: Vec::new(),
        }
    }

    /// Add the core application tables (user, people, planet, favorite) to
    /// the test database, including the composite unique indexes on the
    /// favorite table that the production migrations create.
    pub fn with_core_tables(mut self) -> Self {
        self.include_core_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the given email during `build()`.
    pub fn with_user(mut self, email: impl Into<String>) -> Self {
        self.users.push(email.into());
        self
    }

    /// Insert a mock person with the given numeric uid during `build()`.
    pub fn with_mock_person(mut self, uid: i32) -> Self {
        self.people.push(uid);
        self
    }

    /// Insert a mock planet with the given numeric uid during `build()`.
    pub fn with_mock_planet(mut self, uid: i32) -> Self {
        self.planets.push(uid);
        self
    }

    /// Build the test setup: create tables and indexes, then insert fixtures.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_core_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Person),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Favorite),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        if self.include_core_tables {
            for stmt in favorite_unique_indexes() {
                setup.db.execute(&stmt).await?;
            }
        }

        for email in self.users {
            setup.insert_user(&email).await?;
        }

        for uid in self.people {
            setup.insert_mock_person(uid).await?;
        }

        for uid in self.planets {
            setup.insert_mock_planet(uid).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The same composite unique indexes the production favorite migration
/// creates, for schemas generated from entities.
fn favorite_unique_indexes() -> Vec<IndexCreateStatement> {
    use sea_orm::sea_query::Index;

    vec![
        Index::create()
            .name("idx_favorite_user_id_people_id")
            .table(entity::favorite::Entity)
            .col(entity::favorite::Column::UserId)
            .col(entity::favorite::Column::PeopleId)
            .unique()
            .to_owned(),
        Index::create()
            .name("idx_favorite_user_id_planet_id")
            .table(entity::favorite::Entity)
            .col(entity::favorite::Column::UserId)
            .col(entity::favorite::Column::PlanetId)
            .unique()
            .to_owned(),
    ]
}
