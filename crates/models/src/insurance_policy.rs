use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::descriptor::{EntityDescriptor, EntityKind, FieldDescriptor as F, FieldType};
use crate::errors::ModelError;
use crate::patch::Patch;
use crate::resource::{References, Resource};

/// Held by at most one patient (unique `patients.policy_id`).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "insurance_policies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub policy_number: String,
    pub company_name: String,
    pub expiration_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::InsurancePolicy,
    name: "InsurancePolicy",
    table: "insurance_policies",
    route: "policies",
    tag: "Insurance policies",
    fields: &[
        F::required("policy_number", FieldType::Text),
        F::required("company_name", FieldType::Text),
        F::required("expiration_date", FieldType::Date),
    ],
};

#[derive(Clone, Debug, Deserialize)]
pub struct NewInsurancePolicy {
    pub policy_number: String,
    pub company_name: String,
    pub expiration_date: Date,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct InsurancePolicyPatch {
    pub policy_number: Patch<String>,
    pub company_name: Patch<String>,
    pub expiration_date: Patch<Date>,
}

impl References for NewInsurancePolicy {}
impl References for InsurancePolicyPatch {}

impl Resource for Entity {
    type Create = NewInsurancePolicy;
    type Patch = InsurancePolicyPatch;

    fn descriptor() -> &'static EntityDescriptor {
        &DESCRIPTOR
    }

    fn new_active_model(input: NewInsurancePolicy) -> Result<ActiveModel, ModelError> {
        Ok(ActiveModel {
            id: NotSet,
            policy_number: Set(input.policy_number),
            company_name: Set(input.company_name),
            expiration_date: Set(input.expiration_date),
        })
    }

    fn apply_patch(patch: InsurancePolicyPatch, model: &mut ActiveModel) -> Result<(), ModelError> {
        patch.policy_number.apply_required("policy_number", &mut model.policy_number)?;
        patch.company_name.apply_required("company_name", &mut model.company_name)?;
        patch.expiration_date.apply_required("expiration_date", &mut model.expiration_date)?;
        Ok(())
    }

    fn record_id(model: &Model) -> i32 {
        model.id
    }
}
