//! Lookup indexes on reference columns, applied after every table exists.
//!
//! The schema carries no storage-level foreign keys: deleting a row leaves
//! referencing rows untouched. The two unique indexes encode the one-to-one
//! ownerships (one medical record per appointment, one patient per policy);
//! NULLs stay unconstrained.
use sea_orm_migration::prelude::*;

/// (index name, table, column, unique)
const INDEXES: &[(&str, &str, &str, bool)] = &[
    ("idx_cabinets_department", "cabinets", "department_id", false),
    ("idx_doctors_department", "doctors", "department_id", false),
    ("idx_doctors_specialization", "doctors", "specialization_id", false),
    ("uniq_patients_policy", "patients", "policy_id", true),
    ("idx_schedule_doctor", "schedule", "doctor_id", false),
    ("idx_schedule_cabinet", "schedule", "cabinet_id", false),
    ("idx_appointments_patient", "appointments", "patient_id", false),
    ("idx_appointments_doctor", "appointments", "doctor_id", false),
    ("uniq_medical_records_appointment", "medical_records", "appointment_id", true),
    ("idx_prescriptions_record", "prescriptions", "record_id", false),
    ("idx_services_rendered_record", "services_rendered", "record_id", false),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, column, unique) in INDEXES {
            let mut index = Index::create();
            index
                .name(*name)
                .table(Alias::new(*table))
                .col(Alias::new(*column))
                .if_not_exists();
            if *unique {
                index.unique();
            }
            manager.create_index(index).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, _, _) in INDEXES.iter().rev() {
            manager
                .drop_index(Index::drop().name(*name).table(Alias::new(*table)).to_owned())
                .await?;
        }
        Ok(())
    }
}
