use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::descriptor::{EntityDescriptor, EntityKind, FieldDescriptor as F, FieldType};
use crate::errors::ModelError;
use crate::patch::Patch;
use crate::resource::{References, Resource};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Not checked on write and not cleared when the doctor goes away.
    pub head_doctor_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::Department,
    name: "Department",
    table: "departments",
    route: "departments",
    tag: "Departments",
    fields: &[
        F::required("name", FieldType::Text),
        F::optional("head_doctor_id", FieldType::Integer).weakly_references(EntityKind::Doctor),
    ],
};

#[derive(Clone, Debug, Deserialize)]
pub struct NewDepartment {
    pub name: String,
    #[serde(default)]
    pub head_doctor_id: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DepartmentPatch {
    pub name: Patch<String>,
    pub head_doctor_id: Patch<i32>,
}

impl References for NewDepartment {}
impl References for DepartmentPatch {}

impl Resource for Entity {
    type Create = NewDepartment;
    type Patch = DepartmentPatch;

    fn descriptor() -> &'static EntityDescriptor {
        &DESCRIPTOR
    }

    fn new_active_model(input: NewDepartment) -> Result<ActiveModel, ModelError> {
        Ok(ActiveModel { id: NotSet, name: Set(input.name), head_doctor_id: Set(input.head_doctor_id) })
    }

    fn apply_patch(patch: DepartmentPatch, model: &mut ActiveModel) -> Result<(), ModelError> {
        patch.name.apply_required("name", &mut model.name)?;
        patch.head_doctor_id.apply_nullable(&mut model.head_doctor_id);
        Ok(())
    }

    fn record_id(model: &Model) -> i32 {
        model.id
    }
}
