pub mod datetime;
pub mod db;
pub mod descriptor;
pub mod errors;
pub mod patch;
pub mod resource;

pub mod appointment;
pub mod appointment_status;
pub mod cabinet;
pub mod department;
pub mod diagnosis;
pub mod doctor;
pub mod insurance_policy;
pub mod medical_record;
pub mod patient;
pub mod prescription;
pub mod schedule;
pub mod service_catalog;
pub mod service_rendered;
pub mod specialization;

pub use descriptor::{EntityDescriptor, EntityKind, FieldDescriptor, FieldType};
pub use errors::ModelError;
pub use patch::Patch;
pub use resource::{References, Resource};

#[cfg(test)]
mod tests;
