use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::descriptor::{EntityDescriptor, EntityKind, FieldDescriptor as F, FieldType};
use crate::errors::ModelError;
use crate::medical_record;
use crate::patch::Patch;
use crate::resource::{References, Resource};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "prescriptions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub record_id: Option<i32>,
    pub drug_name: String,
    pub dosage: String,
    pub duration_days: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    MedicalRecord,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::MedicalRecord => Entity::belongs_to(medical_record::Entity)
                .from(Column::RecordId)
                .to(medical_record::Column::Id)
                .into(),
        }
    }
}

impl Related<medical_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MedicalRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::Prescription,
    name: "Prescription",
    table: "prescriptions",
    route: "prescriptions",
    tag: "Prescriptions",
    fields: &[
        F::optional("record_id", FieldType::Integer).references(EntityKind::MedicalRecord),
        F::required("drug_name", FieldType::Text),
        F::required("dosage", FieldType::Text),
        F::required("duration_days", FieldType::Integer),
    ],
};

#[derive(Clone, Debug, Deserialize)]
pub struct NewPrescription {
    #[serde(default)]
    pub record_id: Option<i32>,
    pub drug_name: String,
    pub dosage: String,
    pub duration_days: i32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PrescriptionPatch {
    pub record_id: Patch<i32>,
    pub drug_name: Patch<String>,
    pub dosage: Patch<String>,
    pub duration_days: Patch<i32>,
}

impl References for NewPrescription {
    fn reference(&self, field: &str) -> Option<i32> {
        match field {
            "record_id" => self.record_id,
            _ => None,
        }
    }
}

impl References for PrescriptionPatch {
    fn reference(&self, field: &str) -> Option<i32> {
        match field {
            "record_id" => self.record_id.as_value().copied(),
            _ => None,
        }
    }
}

impl Resource for Entity {
    type Create = NewPrescription;
    type Patch = PrescriptionPatch;

    fn descriptor() -> &'static EntityDescriptor {
        &DESCRIPTOR
    }

    fn new_active_model(input: NewPrescription) -> Result<ActiveModel, ModelError> {
        Ok(ActiveModel {
            id: NotSet,
            record_id: Set(input.record_id),
            drug_name: Set(input.drug_name),
            dosage: Set(input.dosage),
            duration_days: Set(input.duration_days),
        })
    }

    fn apply_patch(patch: PrescriptionPatch, model: &mut ActiveModel) -> Result<(), ModelError> {
        patch.record_id.apply_nullable(&mut model.record_id);
        patch.drug_name.apply_required("drug_name", &mut model.drug_name)?;
        patch.dosage.apply_required("dosage", &mut model.dosage)?;
        patch.duration_days.apply_required("duration_days", &mut model.duration_days)?;
        Ok(())
    }

    fn record_id(model: &Model) -> i32 {
        model.id
    }
}
