//! Static schema description of every record type.
//!
//! Each entity module declares one [`EntityDescriptor`]. The record service
//! reads it to find which reference fields must point at existing rows, the
//! server reads it for route paths and API documentation. Field order
//! matches the table's column order, without `id`.

use std::fmt;

use crate::{
    appointment, appointment_status, cabinet, department, diagnosis, doctor, insurance_policy,
    medical_record, patient, prescription, schedule, service_catalog, service_rendered,
    specialization,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Department,
    Specialization,
    ServiceCatalogEntry,
    Diagnosis,
    AppointmentStatus,
    Cabinet,
    Doctor,
    InsurancePolicy,
    Patient,
    ScheduleSlot,
    Appointment,
    MedicalRecord,
    Prescription,
    ServiceRendered,
}

impl EntityKind {
    pub const ALL: [EntityKind; 14] = [
        EntityKind::Department,
        EntityKind::Specialization,
        EntityKind::ServiceCatalogEntry,
        EntityKind::Diagnosis,
        EntityKind::AppointmentStatus,
        EntityKind::Cabinet,
        EntityKind::Doctor,
        EntityKind::InsurancePolicy,
        EntityKind::Patient,
        EntityKind::ScheduleSlot,
        EntityKind::Appointment,
        EntityKind::MedicalRecord,
        EntityKind::Prescription,
        EntityKind::ServiceRendered,
    ];

    pub fn descriptor(self) -> &'static EntityDescriptor {
        match self {
            EntityKind::Department => &department::DESCRIPTOR,
            EntityKind::Specialization => &specialization::DESCRIPTOR,
            EntityKind::ServiceCatalogEntry => &service_catalog::DESCRIPTOR,
            EntityKind::Diagnosis => &diagnosis::DESCRIPTOR,
            EntityKind::AppointmentStatus => &appointment_status::DESCRIPTOR,
            EntityKind::Cabinet => &cabinet::DESCRIPTOR,
            EntityKind::Doctor => &doctor::DESCRIPTOR,
            EntityKind::InsurancePolicy => &insurance_policy::DESCRIPTOR,
            EntityKind::Patient => &patient::DESCRIPTOR,
            EntityKind::ScheduleSlot => &schedule::DESCRIPTOR,
            EntityKind::Appointment => &appointment::DESCRIPTOR,
            EntityKind::MedicalRecord => &medical_record::DESCRIPTOR,
            EntityKind::Prescription => &prescription::DESCRIPTOR,
            EntityKind::ServiceRendered => &service_rendered::DESCRIPTOR,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    Integer,
    Text,
    /// Fixed-point, two fraction digits.
    Decimal,
    Date,
    Time,
    DateTime,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reference {
    pub target: EntityKind,
    /// `false` for back-references that are stored but never checked.
    pub enforced: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub ty: FieldType,
    pub nullable: bool,
    /// Storage supplies a value when the create payload omits the field.
    pub has_default: bool,
    pub reference: Option<Reference>,
}

impl FieldDescriptor {
    pub const fn required(name: &'static str, ty: FieldType) -> Self {
        Self { name, ty, nullable: false, has_default: false, reference: None }
    }

    pub const fn optional(name: &'static str, ty: FieldType) -> Self {
        Self { name, ty, nullable: true, has_default: false, reference: None }
    }

    pub const fn defaulted(name: &'static str, ty: FieldType) -> Self {
        Self { name, ty, nullable: false, has_default: true, reference: None }
    }

    pub const fn references(mut self, target: EntityKind) -> Self {
        self.reference = Some(Reference { target, enforced: true });
        self
    }

    pub const fn weakly_references(mut self, target: EntityKind) -> Self {
        self.reference = Some(Reference { target, enforced: false });
        self
    }

    pub fn required_on_create(&self) -> bool {
        !self.nullable && !self.has_default
    }
}

#[derive(Debug)]
pub struct EntityDescriptor {
    pub kind: EntityKind,
    /// Singular display name, also the API schema name.
    pub name: &'static str,
    pub table: &'static str,
    /// Collection path segment, e.g. `departments` for `/departments`.
    pub route: &'static str,
    /// Documentation group.
    pub tag: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl EntityDescriptor {
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Reference fields whose targets must exist when the field is written.
    pub fn enforced_references(&self) -> impl Iterator<Item = (&'static FieldDescriptor, EntityKind)> {
        self.fields.iter().filter_map(|f| match f.reference {
            Some(Reference { target, enforced: true }) => Some((f, target)),
            _ => None,
        })
    }
}

/// All descriptors, reference tables first.
pub fn registry() -> impl Iterator<Item = &'static EntityDescriptor> {
    EntityKind::ALL.into_iter().map(EntityKind::descriptor)
}
