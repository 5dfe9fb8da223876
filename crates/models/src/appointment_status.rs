use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::descriptor::{EntityDescriptor, EntityKind, FieldDescriptor as F, FieldType};
use crate::errors::ModelError;
use crate::patch::Patch;
use crate::resource::{References, Resource};

/// Valid statuses are whatever rows exist; there is no fixed list.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "appointment_statuses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::AppointmentStatus,
    name: "AppointmentStatus",
    table: "appointment_statuses",
    route: "statuses",
    tag: "Appointment statuses",
    fields: &[F::required("name", FieldType::Text)],
};

#[derive(Clone, Debug, Deserialize)]
pub struct NewAppointmentStatus {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppointmentStatusPatch {
    pub name: Patch<String>,
}

impl References for NewAppointmentStatus {}
impl References for AppointmentStatusPatch {}

impl Resource for Entity {
    type Create = NewAppointmentStatus;
    type Patch = AppointmentStatusPatch;

    fn descriptor() -> &'static EntityDescriptor {
        &DESCRIPTOR
    }

    fn new_active_model(input: NewAppointmentStatus) -> Result<ActiveModel, ModelError> {
        Ok(ActiveModel { id: NotSet, name: Set(input.name) })
    }

    fn apply_patch(patch: AppointmentStatusPatch, model: &mut ActiveModel) -> Result<(), ModelError> {
        patch.name.apply_required("name", &mut model.name)
    }

    fn record_id(model: &Model) -> i32 {
        model.id
    }
}
