use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Doctors::Table)
                    .if_not_exists()
                    .col(pk_auto(Doctors::Id))
                    .col(string(Doctors::LastName))
                    .col(string(Doctors::FirstName))
                    .col(string_null(Doctors::MiddleName))
                    .col(integer_null(Doctors::SpecializationId))
                    .col(integer_null(Doctors::DepartmentId))
                    .col(string_null(Doctors::Category))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Doctors::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Doctors { Table, Id, LastName, FirstName, MiddleName, SpecializationId, DepartmentId, Category }
