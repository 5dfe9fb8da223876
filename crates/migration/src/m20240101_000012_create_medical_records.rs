//! `medical_records`: `appointment_id` is the only NOT NULL reference in the
//! schema. Uniqueness per appointment is added by the index migration.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MedicalRecords::Table)
                    .if_not_exists()
                    .col(pk_auto(MedicalRecords::Id))
                    .col(integer(MedicalRecords::AppointmentId))
                    .col(text_null(MedicalRecords::Complaints))
                    .col(text_null(MedicalRecords::Anamnesis))
                    .col(integer_null(MedicalRecords::DiagnosisId))
                    .col(text_null(MedicalRecords::Recommendations))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MedicalRecords::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum MedicalRecords { Table, Id, AppointmentId, Complaints, Anamnesis, DiagnosisId, Recommendations }
