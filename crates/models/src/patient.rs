use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::descriptor::{EntityDescriptor, EntityKind, FieldDescriptor as F, FieldType};
use crate::errors::ModelError;
use crate::insurance_policy;
use crate::patch::Patch;
use crate::resource::{References, Resource};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "patients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub birth_date: Date,
    pub phone: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,
    #[sea_orm(unique)]
    pub policy_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    InsurancePolicy,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::InsurancePolicy => Entity::belongs_to(insurance_policy::Entity)
                .from(Column::PolicyId)
                .to(insurance_policy::Column::Id)
                .into(),
        }
    }
}

impl Related<insurance_policy::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InsurancePolicy.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::Patient,
    name: "Patient",
    table: "patients",
    route: "patients",
    tag: "Patients",
    fields: &[
        F::required("last_name", FieldType::Text),
        F::required("first_name", FieldType::Text),
        F::optional("middle_name", FieldType::Text),
        F::required("birth_date", FieldType::Date),
        F::optional("phone", FieldType::Text),
        F::optional("address", FieldType::Text),
        F::optional("policy_id", FieldType::Integer).references(EntityKind::InsurancePolicy),
    ],
};

#[derive(Clone, Debug, Deserialize)]
pub struct NewPatient {
    pub last_name: String,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub birth_date: Date,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub policy_id: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PatientPatch {
    pub last_name: Patch<String>,
    pub first_name: Patch<String>,
    pub middle_name: Patch<String>,
    pub birth_date: Patch<Date>,
    pub phone: Patch<String>,
    pub address: Patch<String>,
    pub policy_id: Patch<i32>,
}

impl References for NewPatient {
    fn reference(&self, field: &str) -> Option<i32> {
        match field {
            "policy_id" => self.policy_id,
            _ => None,
        }
    }
}

impl References for PatientPatch {
    fn reference(&self, field: &str) -> Option<i32> {
        match field {
            "policy_id" => self.policy_id.as_value().copied(),
            _ => None,
        }
    }
}

impl Resource for Entity {
    type Create = NewPatient;
    type Patch = PatientPatch;

    fn descriptor() -> &'static EntityDescriptor {
        &DESCRIPTOR
    }

    fn new_active_model(input: NewPatient) -> Result<ActiveModel, ModelError> {
        Ok(ActiveModel {
            id: NotSet,
            last_name: Set(input.last_name),
            first_name: Set(input.first_name),
            middle_name: Set(input.middle_name),
            birth_date: Set(input.birth_date),
            phone: Set(input.phone),
            address: Set(input.address),
            policy_id: Set(input.policy_id),
        })
    }

    fn apply_patch(patch: PatientPatch, model: &mut ActiveModel) -> Result<(), ModelError> {
        patch.last_name.apply_required("last_name", &mut model.last_name)?;
        patch.first_name.apply_required("first_name", &mut model.first_name)?;
        patch.middle_name.apply_nullable(&mut model.middle_name);
        patch.birth_date.apply_required("birth_date", &mut model.birth_date)?;
        patch.phone.apply_nullable(&mut model.phone);
        patch.address.apply_nullable(&mut model.address);
        patch.policy_id.apply_nullable(&mut model.policy_id);
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
    fn birth_date_uses_iso_format() {
        let input: NewPatient = serde_json::from_str(
            r#"{"last_name": "Petrov", "first_name": "Petr", "birth_date": "1990-05-15"}"#,
        )
        .unwrap();
        assert_eq!(input.birth_date, Date::from_ymd_opt(1990, 5, 15).unwrap());
        assert_eq!(input.policy_id, None);
    }

    #[test]
    fn missing_required_field_fails_to_parse() {
        assert!(serde_json::from_str::<NewPatient>(r#"{"last_name": "Petrov", "first_name": "Petr"}"#).is_err());
    }
}
