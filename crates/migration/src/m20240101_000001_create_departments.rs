//! `departments`: reference table. `head_doctor_id` is a plain integer
//! column with no foreign key; it may point at a doctor that does not exist.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(pk_auto(Departments::Id))
                    .col(string(Departments::Name))
                    .col(integer_null(Departments::HeadDoctorId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Departments::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Departments { Table, Id, Name, HeadDoctorId }
