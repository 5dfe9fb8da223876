use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppointmentStatuses::Table)
                    .if_not_exists()
                    .col(pk_auto(AppointmentStatuses::Id))
                    .col(string(AppointmentStatuses::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AppointmentStatuses::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AppointmentStatuses { Table, Id, Name }
