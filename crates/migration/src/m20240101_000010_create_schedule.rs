//! `schedule`: weekly slots. `day_of_week` runs 1 (Monday) to 7 (Sunday).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schedule::Table)
                    .if_not_exists()
                    .col(pk_auto(Schedule::Id))
                    .col(integer_null(Schedule::DoctorId))
                    .col(integer_null(Schedule::CabinetId))
                    .col(integer(Schedule::DayOfWeek))
                    .col(time(Schedule::StartTime))
                    .col(time(Schedule::EndTime))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Schedule::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Schedule { Table, Id, DoctorId, CabinetId, DayOfWeek, StartTime, EndTime }
