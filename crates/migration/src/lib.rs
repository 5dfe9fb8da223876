//! Migrator registering one migration per table in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_departments;
mod m20240101_000002_create_specializations;
mod m20240101_000003_create_service_catalog;
mod m20240101_000004_create_diagnoses;
mod m20240101_000005_create_appointment_statuses;
mod m20240101_000006_create_cabinets;
mod m20240101_000007_create_doctors;
mod m20240101_000008_create_insurance_policies;
mod m20240101_000009_create_patients;
mod m20240101_000010_create_schedule;
mod m20240101_000011_create_appointments;
mod m20240101_000012_create_medical_records;
mod m20240101_000013_create_prescriptions;
mod m20240101_000014_create_services_rendered;
mod m20240101_000015_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_departments::Migration),
            Box::new(m20240101_000002_create_specializations::Migration),
            Box::new(m20240101_000003_create_service_catalog::Migration),
            Box::new(m20240101_000004_create_diagnoses::Migration),
            Box::new(m20240101_000005_create_appointment_statuses::Migration),
            Box::new(m20240101_000006_create_cabinets::Migration),
            Box::new(m20240101_000007_create_doctors::Migration),
            Box::new(m20240101_000008_create_insurance_policies::Migration),
            Box::new(m20240101_000009_create_patients::Migration),
            Box::new(m20240101_000010_create_schedule::Migration),
            Box::new(m20240101_000011_create_appointments::Migration),
            Box::new(m20240101_000012_create_medical_records::Migration),
            Box::new(m20240101_000013_create_prescriptions::Migration),
            Box::new(m20240101_000014_create_services_rendered::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000015_add_indexes::Migration),
        ]
    }
}
