use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::descriptor::{EntityDescriptor, EntityKind, FieldDescriptor as F, FieldType};
use crate::errors::ModelError;
use crate::patch::Patch;
use crate::resource::{References, Resource};
use crate::{appointment, diagnosis};

/// Visit outcome; one per appointment (unique `appointment_id`).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "medical_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub appointment_id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub complaints: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub anamnesis: Option<String>,
    pub diagnosis_id: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub recommendations: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Appointment,
    Diagnosis,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Appointment => Entity::belongs_to(appointment::Entity)
                .from(Column::AppointmentId)
                .to(appointment::Column::Id)
                .into(),
            Relation::Diagnosis => Entity::belongs_to(diagnosis::Entity)
                .from(Column::DiagnosisId)
                .to(diagnosis::Column::Id)
                .into(),
        }
    }
}

impl Related<appointment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointment.def()
    }
}

impl Related<diagnosis::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Diagnosis.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::MedicalRecord,
    name: "MedicalRecord",
    table: "medical_records",
    route: "medical_records",
    tag: "Medical records",
    fields: &[
        F::required("appointment_id", FieldType::Integer).references(EntityKind::Appointment),
        F::optional("complaints", FieldType::Text),
        F::optional("anamnesis", FieldType::Text),
        F::optional("diagnosis_id", FieldType::Integer).references(EntityKind::Diagnosis),
        F::optional("recommendations", FieldType::Text),
    ],
};

#[derive(Clone, Debug, Deserialize)]
pub struct NewMedicalRecord {
    pub appointment_id: i32,
    #[serde(default)]
    pub complaints: Option<String>,
    #[serde(default)]
    pub anamnesis: Option<String>,
    #[serde(default)]
    pub diagnosis_id: Option<i32>,
    #[serde(default)]
    pub recommendations: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MedicalRecordPatch {
    pub appointment_id: Patch<i32>,
    pub complaints: Patch<String>,
    pub anamnesis: Patch<String>,
    pub diagnosis_id: Patch<i32>,
    pub recommendations: Patch<String>,
}

impl References for NewMedicalRecord {
    fn reference(&self, field: &str) -> Option<i32> {
        match field {
            "appointment_id" => Some(self.appointment_id),
            "diagnosis_id" => self.diagnosis_id,
            _ => None,
        }
    }
}

impl References for MedicalRecordPatch {
    fn reference(&self, field: &str) -> Option<i32> {
        match field {
            "appointment_id" => self.appointment_id.as_value().copied(),
            "diagnosis_id" => self.diagnosis_id.as_value().copied(),
            _ => None,
        }
    }
}

impl Resource for Entity {
    type Create = NewMedicalRecord;
    type Patch = MedicalRecordPatch;

    fn descriptor() -> &'static EntityDescriptor {
        &DESCRIPTOR
    }

    fn new_active_model(input: NewMedicalRecord) -> Result<ActiveModel, ModelError> {
        Ok(ActiveModel {
            id: NotSet,
            appointment_id: Set(input.appointment_id),
            complaints: Set(input.complaints),
            anamnesis: Set(input.anamnesis),
            diagnosis_id: Set(input.diagnosis_id),
            recommendations: Set(input.recommendations),
        })
    }

    fn apply_patch(patch: MedicalRecordPatch, model: &mut ActiveModel) -> Result<(), ModelError> {
        patch.appointment_id.apply_required("appointment_id", &mut model.appointment_id)?;
        patch.complaints.apply_nullable(&mut model.complaints);
        patch.anamnesis.apply_nullable(&mut model.anamnesis);
        patch.diagnosis_id.apply_nullable(&mut model.diagnosis_id);
        patch.recommendations.apply_nullable(&mut model.recommendations);
        Ok(())
    }

    fn record_id(model: &Model) -> i32 {
        model.id
    }
}
