use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Specializations::Table)
                    .if_not_exists()
                    .col(pk_auto(Specializations::Id))
                    .col(string(Specializations::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Specializations::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Specializations { Table, Id, Name }
