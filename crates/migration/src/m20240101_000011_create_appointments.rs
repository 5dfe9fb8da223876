use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointments::Table)
                    .if_not_exists()
                    .col(pk_auto(Appointments::Id))
                    .col(integer_null(Appointments::PatientId))
                    .col(integer_null(Appointments::DoctorId))
                    .col(date_time(Appointments::Datetime))
                    .col(integer_null(Appointments::StatusId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Appointments::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Appointments { Table, Id, PatientId, DoctorId, Datetime, StatusId }
