use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(pk_auto(People::Id))
                    .col(string_uniq(People::Uid))
                    .col(string(People::Name))
                    .col(string_null(People::BirthYear))
                    .col(string_null(People::EyeColor))
                    .col(string_null(People::Gender))
                    .col(string_null(People::HairColor))
                    .col(string_null(People::Height))
                    .col(string_null(People::Mass))
                    .col(string_null(People::SkinColor))
                    .col(string_null(People::Homeworld))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum People {
    Table,
    Id,
    Uid,
    Name,
    BirthYear,
    EyeColor,
    Gender,
    HairColor,
    Height,
    Mass,
    SkinColor,
    Homeworld,
}
