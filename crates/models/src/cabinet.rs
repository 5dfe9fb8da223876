use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::department;
use crate::descriptor::{EntityDescriptor, EntityKind, FieldDescriptor as F, FieldType};
use crate::errors::ModelError;
use crate::patch::Patch;
use crate::resource::{References, Resource};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cabinets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Room label as printed on the door, e.g. `101` or `2-14a`.
    pub number: String,
    pub floor: i32,
    pub department_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Department,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Department => Entity::belongs_to(department::Entity)
                .from(Column::DepartmentId)
                .to(department::Column::Id)
                .into(),
        }
    }
}

impl Related<department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::Cabinet,
    name: "Cabinet",
    table: "cabinets",
    route: "cabinets",
    tag: "Cabinets",
    fields: &[
        F::required("number", FieldType::Text),
        F::required("floor", FieldType::Integer),
        F::optional("department_id", FieldType::Integer).references(EntityKind::Department),
    ],
};

#[derive(Clone, Debug, Deserialize)]
pub struct NewCabinet {
    pub number: String,
    pub floor: i32,
    #[serde(default)]
    pub department_id: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CabinetPatch {
    pub number: Patch<String>,
    pub floor: Patch<i32>,
    pub department_id: Patch<i32>,
}

impl References for NewCabinet {
    fn reference(&self, field: &str) -> Option<i32> {
        match field {
            "department_id" => self.department_id,
            _ => None,
        }
    }
}

impl References for CabinetPatch {
    fn reference(&self, field: &str) -> Option<i32> {
        match field {
            "department_id" => self.department_id.as_value().copied(),
            _ => None,
        }
    }
}

impl Resource for Entity {
    type Create = NewCabinet;
    type Patch = CabinetPatch;

    fn descriptor() -> &'static EntityDescriptor {
        &DESCRIPTOR
    }

    fn new_active_model(input: NewCabinet) -> Result<ActiveModel, ModelError> {
        Ok(ActiveModel {
            id: NotSet,
            number: Set(input.number),
            floor: Set(input.floor),
            department_id: Set(input.department_id),
        })
    }

    fn apply_patch(patch: CabinetPatch, model: &mut ActiveModel) -> Result<(), ModelError> {
        patch.number.apply_required("number", &mut model.number)?;
        patch.floor.apply_required("floor", &mut model.floor)?;
        patch.department_id.apply_nullable(&mut model.department_id);
        Ok(())
    }

    fn record_id(model: &Model) -> i32 {
        model.id
    }
}
