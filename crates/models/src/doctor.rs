use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::descriptor::{EntityDescriptor, EntityKind, FieldDescriptor as F, FieldType};
use crate::errors::ModelError;
use crate::patch::Patch;
use crate::resource::{References, Resource};
use crate::{department, specialization};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "doctors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub specialization_id: Option<i32>,
    pub department_id: Option<i32>,
    /// Qualification category, free text.
    pub category: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Specialization,
    Department,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Specialization => Entity::belongs_to(specialization::Entity)
                .from(Column::SpecializationId)
                .to(specialization::Column::Id)
                .into(),
            Relation::Department => Entity::belongs_to(department::Entity)
                .from(Column::DepartmentId)
                .to(department::Column::Id)
                .into(),
        }
    }
}

impl Related<specialization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Specialization.def()
    }
}

impl Related<department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::Doctor,
    name: "Doctor",
    table: "doctors",
    route: "doctors",
    tag: "Doctors",
    fields: &[
        F::required("last_name", FieldType::Text),
        F::required("first_name", FieldType::Text),
        F::optional("middle_name", FieldType::Text),
        F::optional("specialization_id", FieldType::Integer).references(EntityKind::Specialization),
        F::optional("department_id", FieldType::Integer).references(EntityKind::Department),
        F::optional("category", FieldType::Text),
    ],
};

#[derive(Clone, Debug, Deserialize)]
pub struct NewDoctor {
    pub last_name: String,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub specialization_id: Option<i32>,
    #[serde(default)]
    pub department_id: Option<i32>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DoctorPatch {
    pub last_name: Patch<String>,
    pub first_name: Patch<String>,
    pub middle_name: Patch<String>,
    pub specialization_id: Patch<i32>,
    pub department_id: Patch<i32>,
    pub category: Patch<String>,
}

impl References for NewDoctor {
    fn reference(&self, field: &str) -> Option<i32> {
        match field {
            "specialization_id" => self.specialization_id,
            "department_id" => self.department_id,
            _ => None,
        }
    }
}

impl References for DoctorPatch {
    fn reference(&self, field: &str) -> Option<i32> {
        match field {
            "specialization_id" => self.specialization_id.as_value().copied(),
            "department_id" => self.department_id.as_value().copied(),
            _ => None,
        }
    }
}

impl Resource for Entity {
    type Create = NewDoctor;
    type Patch = DoctorPatch;

    fn descriptor() -> &'static EntityDescriptor {
        &DESCRIPTOR
    }

    fn new_active_model(input: NewDoctor) -> Result<ActiveModel, ModelError> {
        Ok(ActiveModel {
            id: NotSet,
            last_name: Set(input.last_name),
            first_name: Set(input.first_name),
            middle_name: Set(input.middle_name),
            specialization_id: Set(input.specialization_id),
            department_id: Set(input.department_id),
            category: Set(input.category),
        })
    }

    fn apply_patch(patch: DoctorPatch, model: &mut ActiveModel) -> Result<(), ModelError> {
        patch.last_name.apply_required("last_name", &mut model.last_name)?;
        patch.first_name.apply_required("first_name", &mut model.first_name)?;
        patch.middle_name.apply_nullable(&mut model.middle_name);
        patch.specialization_id.apply_nullable(&mut model.specialization_id);
        patch.department_id.apply_nullable(&mut model.department_id);
        patch.category.apply_nullable(&mut model.category);
        Ok(())
    }

    fn record_id(model: &Model) -> i32 {
        model.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_exposes_only_written_references() {
        let patch: DoctorPatch =
            serde_json::from_str(r#"{"department_id": 4, "specialization_id": null}"#).unwrap();
        assert_eq!(patch.reference("department_id"), Some(4));
        assert_eq!(patch.reference("specialization_id"), None);
        assert_eq!(patch.reference("category"), None);
    }

    #[test]
    fn patch_leaves_absent_fields_unchanged() {
        let mut am = ActiveModel {
            id: sea_orm::ActiveValue::Unchanged(1),
            last_name: sea_orm::ActiveValue::Unchanged("Ivanov".into()),
            first_name: sea_orm::ActiveValue::Unchanged("Ivan".into()),
            middle_name: sea_orm::ActiveValue::Unchanged(None),
            specialization_id: sea_orm::ActiveValue::Unchanged(None),
            department_id: sea_orm::ActiveValue::Unchanged(Some(1)),
            category: sea_orm::ActiveValue::Unchanged(None),
        };
        let patch: DoctorPatch = serde_json::from_str(r#"{"category": "Senior"}"#).unwrap();
        Entity::apply_patch(patch, &mut am).unwrap();
        assert_eq!(am.category, Set(Some("Senior".to_string())));
        assert_eq!(am.department_id, sea_orm::ActiveValue::Unchanged(Some(1)));
    }
}
