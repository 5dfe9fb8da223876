use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::descriptor::{EntityDescriptor, EntityKind, FieldDescriptor as F, FieldType};
use crate::errors::ModelError;
use crate::patch::Patch;
use crate::resource::{References, Resource};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "specializations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::Specialization,
    name: "Specialization",
    table: "specializations",
    route: "specializations",
    tag: "Specializations",
    fields: &[F::required("name", FieldType::Text)],
};

#[derive(Clone, Debug, Deserialize)]
pub struct NewSpecialization {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SpecializationPatch {
    pub name: Patch<String>,
}

impl References for NewSpecialization {}
impl References for SpecializationPatch {}

impl Resource for Entity {
    type Create = NewSpecialization;
    type Patch = SpecializationPatch;

    fn descriptor() -> &'static EntityDescriptor {
        &DESCRIPTOR
    }

    fn new_active_model(input: NewSpecialization) -> Result<ActiveModel, ModelError> {
        Ok(ActiveModel { id: NotSet, name: Set(input.name) })
    }

    fn apply_patch(patch: SpecializationPatch, model: &mut ActiveModel) -> Result<(), ModelError> {
        patch.name.apply_required("name", &mut model.name)
    }

    fn record_id(model: &Model) -> i32 {
        model.id
    }
}
