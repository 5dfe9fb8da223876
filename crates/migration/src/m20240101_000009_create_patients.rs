use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Patients::Table)
                    .if_not_exists()
                    .col(pk_auto(Patients::Id))
                    .col(string(Patients::LastName))
                    .col(string(Patients::FirstName))
                    .col(string_null(Patients::MiddleName))
                    .col(date(Patients::BirthDate))
                    .col(string_null(Patients::Phone))
                    .col(text_null(Patients::Address))
                    .col(integer_null(Patients::PolicyId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Patients::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Patients { Table, Id, LastName, FirstName, MiddleName, BirthDate, Phone, Address, PolicyId }
