use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::descriptor::{EntityDescriptor, EntityKind, FieldDescriptor as F, FieldType};
use crate::errors::ModelError;
use crate::patch::Patch;
use crate::resource::{References, Resource};
use crate::{medical_record, service_catalog};

/// A catalog service billed against a medical record.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services_rendered")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub record_id: Option<i32>,
    pub service_id: Option<i32>,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    MedicalRecord,
    Service,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::MedicalRecord => Entity::belongs_to(medical_record::Entity)
                .from(Column::RecordId)
                .to(medical_record::Column::Id)
                .into(),
            Relation::Service => Entity::belongs_to(service_catalog::Entity)
                .from(Column::ServiceId)
                .to(service_catalog::Column::Id)
                .into(),
        }
    }
}

impl Related<medical_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MedicalRecord.def()
    }
}

impl Related<service_catalog::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Service.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::ServiceRendered,
    name: "ServiceRendered",
    table: "services_rendered",
    route: "services_rendered",
    tag: "Services rendered",
    fields: &[
        F::optional("record_id", FieldType::Integer).references(EntityKind::MedicalRecord),
        F::optional("service_id", FieldType::Integer).references(EntityKind::ServiceCatalogEntry),
        F::defaulted("quantity", FieldType::Integer),
    ],
};

fn one() -> i32 {
    1
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewServiceRendered {
    #[serde(default)]
    pub record_id: Option<i32>,
    #[serde(default)]
    pub service_id: Option<i32>,
    #[serde(default = "one")]
    pub quantity: i32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ServiceRenderedPatch {
    pub record_id: Patch<i32>,
    pub service_id: Patch<i32>,
    pub quantity: Patch<i32>,
}

impl References for NewServiceRendered {
    fn reference(&self, field: &str) -> Option<i32> {
        match field {
            "record_id" => self.record_id,
            "service_id" => self.service_id,
            _ => None,
        }
    }
}

impl References for ServiceRenderedPatch {
    fn reference(&self, field: &str) -> Option<i32> {
        match field {
            "record_id" => self.record_id.as_value().copied(),
            "service_id" => self.service_id.as_value().copied(),
            _ => None,
        }
    }
}

impl Resource for Entity {
    type Create = NewServiceRendered;
    type Patch = ServiceRenderedPatch;

    fn descriptor() -> &'static EntityDescriptor {
        &DESCRIPTOR
    }

    fn new_active_model(input: NewServiceRendered) -> Result<ActiveModel, ModelError> {
        Ok(ActiveModel {
            id: NotSet,
            record_id: Set(input.record_id),
            service_id: Set(input.service_id),
            quantity: Set(input.quantity),
        })
    }

    fn apply_patch(patch: ServiceRenderedPatch, model: &mut ActiveModel) -> Result<(), ModelError> {
        patch.record_id.apply_nullable(&mut model.record_id);
        patch.service_id.apply_nullable(&mut model.service_id);
        patch.quantity.apply_required("quantity", &mut model.quantity)?;
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
    fn quantity_defaults_to_one() {
        let input: NewServiceRendered = serde_json::from_str(r#"{"record_id": 1, "service_id": 2}"#).unwrap();
        assert_eq!(input.quantity, 1);
    }
}
