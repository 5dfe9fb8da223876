use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Diagnoses::Table)
                    .if_not_exists()
                    .col(pk_auto(Diagnoses::Id))
                    .col(string(Diagnoses::MkbCode))
                    .col(text_null(Diagnoses::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Diagnoses::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Diagnoses { Table, Id, MkbCode, Description }
