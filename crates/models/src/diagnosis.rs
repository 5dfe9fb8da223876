use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::descriptor::{EntityDescriptor, EntityKind, FieldDescriptor as F, FieldType};
use crate::errors::ModelError;
use crate::patch::Patch;
use crate::resource::{References, Resource};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "diagnoses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// ICD-10 classification code, e.g. `J10`.
    pub mkb_code: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::Diagnosis,
    name: "Diagnosis",
    table: "diagnoses",
    route: "diagnoses",
    tag: "Diagnoses",
    fields: &[
        F::required("mkb_code", FieldType::Text),
        F::optional("description", FieldType::Text),
    ],
};

#[derive(Clone, Debug, Deserialize)]
pub struct NewDiagnosis {
    pub mkb_code: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DiagnosisPatch {
    pub mkb_code: Patch<String>,
    pub description: Patch<String>,
}

impl References for NewDiagnosis {}
impl References for DiagnosisPatch {}

impl Resource for Entity {
    type Create = NewDiagnosis;
    type Patch = DiagnosisPatch;

    fn descriptor() -> &'static EntityDescriptor {
        &DESCRIPTOR
    }

    fn new_active_model(input: NewDiagnosis) -> Result<ActiveModel, ModelError> {
        Ok(ActiveModel { id: NotSet, mkb_code: Set(input.mkb_code), description: Set(input.description) })
    }

    fn apply_patch(patch: DiagnosisPatch, model: &mut ActiveModel) -> Result<(), ModelError> {
        patch.mkb_code.apply_required("mkb_code", &mut model.mkb_code)?;
        patch.description.apply_nullable(&mut model.description);
        Ok(())
    }

    fn record_id(model: &Model) -> i32 {
        model.id
    }
}
