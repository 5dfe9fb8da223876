use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::descriptor::{EntityDescriptor, EntityKind, FieldDescriptor as F, FieldType};
use crate::errors::ModelError;
use crate::patch::Patch;
use crate::resource::{References, Resource};
use crate::{appointment_status, doctor, patient};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "appointments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub patient_id: Option<i32>,
    pub doctor_id: Option<i32>,
    pub datetime: DateTime,
    pub status_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Patient,
    Doctor,
    Status,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Patient => Entity::belongs_to(patient::Entity)
                .from(Column::PatientId)
                .to(patient::Column::Id)
                .into(),
            Relation::Doctor => Entity::belongs_to(doctor::Entity)
                .from(Column::DoctorId)
                .to(doctor::Column::Id)
                .into(),
            Relation::Status => Entity::belongs_to(appointment_status::Entity)
                .from(Column::StatusId)
                .to(appointment_status::Column::Id)
                .into(),
        }
    }
}

impl Related<patient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Patient.def()
    }
}

impl Related<doctor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Doctor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::Appointment,
    name: "Appointment",
    table: "appointments",
    route: "appointments",
    tag: "Appointments",
    fields: &[
        F::optional("patient_id", FieldType::Integer).references(EntityKind::Patient),
        F::optional("doctor_id", FieldType::Integer).references(EntityKind::Doctor),
        F::required("datetime", FieldType::DateTime),
        F::optional("status_id", FieldType::Integer).references(EntityKind::AppointmentStatus),
    ],
};

#[derive(Clone, Debug, Deserialize)]
pub struct NewAppointment {
    #[serde(default)]
    pub patient_id: Option<i32>,
    #[serde(default)]
    pub doctor_id: Option<i32>,
    #[serde(deserialize_with = "crate::datetime::deserialize")]
    pub datetime: DateTime,
    #[serde(default)]
    pub status_id: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppointmentPatch {
    pub patient_id: Patch<i32>,
    pub doctor_id: Patch<i32>,
    #[serde(deserialize_with = "crate::datetime::deserialize_patch")]
    pub datetime: Patch<DateTime>,
    pub status_id: Patch<i32>,
}

impl References for NewAppointment {
    fn reference(&self, field: &str) -> Option<i32> {
        match field {
            "patient_id" => self.patient_id,
            "doctor_id" => self.doctor_id,
            "status_id" => self.status_id,
            _ => None,
        }
    }
}

impl References for AppointmentPatch {
    fn reference(&self, field: &str) -> Option<i32> {
        match field {
            "patient_id" => self.patient_id.as_value().copied(),
            "doctor_id" => self.doctor_id.as_value().copied(),
            "status_id" => self.status_id.as_value().copied(),
            _ => None,
        }
    }
}

impl Resource for Entity {
    type Create = NewAppointment;
    type Patch = AppointmentPatch;

    fn descriptor() -> &'static EntityDescriptor {
        &DESCRIPTOR
    }

    fn new_active_model(input: NewAppointment) -> Result<ActiveModel, ModelError> {
        Ok(ActiveModel {
            id: NotSet,
            patient_id: Set(input.patient_id),
            doctor_id: Set(input.doctor_id),
            datetime: Set(input.datetime),
            status_id: Set(input.status_id),
        })
    }

    fn apply_patch(patch: AppointmentPatch, model: &mut ActiveModel) -> Result<(), ModelError> {
        patch.patient_id.apply_nullable(&mut model.patient_id);
        patch.doctor_id.apply_nullable(&mut model.doctor_id);
        patch.datetime.apply_required("datetime", &mut model.datetime)?;
        patch.status_id.apply_nullable(&mut model.status_id);
        Ok(())
    }

    fn record_id(model: &Model) -> i32 {
        model.id
    }
}
