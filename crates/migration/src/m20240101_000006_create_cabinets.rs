use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cabinets::Table)
                    .if_not_exists()
                    .col(pk_auto(Cabinets::Id))
                    .col(string_len(Cabinets::Number, 32))
                    .col(integer(Cabinets::Floor))
                    .col(integer_null(Cabinets::DepartmentId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Cabinets::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Cabinets { Table, Id, Number, Floor, DepartmentId }
