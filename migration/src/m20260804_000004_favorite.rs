use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260804_000001_user::User, m20260804_000002_people::People, m20260804_000003_planet::Planet,
};

static IDX_FAVORITE_USER_ID: &str = "idx_favorite_user_id";
static IDX_FAVORITE_USER_ID_PEOPLE_ID: &str = "idx_favorite_user_id_people_id";
static IDX_FAVORITE_USER_ID_PLANET_ID: &str = "idx_favorite_user_id_planet_id";
static FK_FAVORITE_USER_ID: &str = "fk_favorite_user_id";
static FK_FAVORITE_PEOPLE_ID: &str = "fk_favorite_people_id";
static FK_FAVORITE_PLANET_ID: &str = "fk_favorite_planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorite::Id))
                    .col(integer(Favorite::UserId))
                    .col(integer_null(Favorite::PeopleId))
                    .col(integer_null(Favorite::PlanetId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_USER_ID)
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .to_owned(),
            )
            .await?;

        // Authoritative duplicate guards: UNIQUE treats null as not-equal, so
        // rows for the other target kind never collide.
        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_USER_ID_PEOPLE_ID)
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .col(Favorite::PeopleId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_USER_ID_PLANET_ID)
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .col(Favorite::PlanetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_USER_ID)
                    .from_tbl(Favorite::Table)
                    .from_col(Favorite::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_PEOPLE_ID)
                    .from_tbl(Favorite::Table)
                    .from_col(Favorite::PeopleId)
                    .to_tbl(People::Table)
                    .to_col(People::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_PLANET_ID)
                    .from_tbl(Favorite::Table)
                    .from_col(Favorite::PlanetId)
                    .to_tbl(Planet::Table)
                    .to_col(Planet::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_PLANET_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_PEOPLE_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_USER_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_USER_ID_PLANET_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_USER_ID_PEOPLE_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_USER_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorite {
    Table,
    Id,
    UserId,
    PeopleId,
    PlanetId,
}
