use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Prescriptions::Table)
                    .if_not_exists()
                    .col(pk_auto(Prescriptions::Id))
                    .col(integer_null(Prescriptions::RecordId))
                    .col(string(Prescriptions::DrugName))
                    .col(string(Prescriptions::Dosage))
                    .col(integer(Prescriptions::DurationDays))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Prescriptions::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Prescriptions { Table, Id, RecordId, DrugName, Dosage, DurationDays }
