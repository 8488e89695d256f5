pub use sea_orm_migration::prelude::*;

mod m20260804_000001_user;
mod m20260804_000002_people;
mod m20260804_000003_planet;
mod m20260804_000004_favorite;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260804_000001_user::Migration),
            Box::new(m20260804_000002_people::Migration),
            Box::new(m20260804_000003_planet::Migration),
            Box::new(m20260804_000004_favorite::Migration),
        ]
    }
}
