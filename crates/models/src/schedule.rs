use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::descriptor::{EntityDescriptor, EntityKind, FieldDescriptor as F, FieldType};
use crate::errors::ModelError;
use crate::patch::Patch;
use crate::resource::{check_day_of_week, References, Resource};
use crate::{cabinet, doctor};

/// Weekly recurring slot of a doctor in a cabinet.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "schedule")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub doctor_id: Option<i32>,
    pub cabinet_id: Option<i32>,
    pub day_of_week: i32,
    pub start_time: Time,
    pub end_time: Time,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Doctor,
    Cabinet,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Doctor => Entity::belongs_to(doctor::Entity)
                .from(Column::DoctorId)
                .to(doctor::Column::Id)
                .into(),
            Relation::Cabinet => Entity::belongs_to(cabinet::Entity)
                .from(Column::CabinetId)
                .to(cabinet::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::ScheduleSlot,
    name: "ScheduleSlot",
    table: "schedule",
    route: "schedules",
    tag: "Schedule",
    fields: &[
        F::optional("doctor_id", FieldType::Integer).references(EntityKind::Doctor),
        F::optional("cabinet_id", FieldType::Integer).references(EntityKind::Cabinet),
        F::required("day_of_week", FieldType::Integer),
        F::required("start_time", FieldType::Time),
        F::required("end_time", FieldType::Time),
    ],
};

#[derive(Clone, Debug, Deserialize)]
pub struct NewScheduleSlot {
    #[serde(default)]
    pub doctor_id: Option<i32>,
    #[serde(default)]
    pub cabinet_id: Option<i32>,
    pub day_of_week: i32,
    pub start_time: Time,
    pub end_time: Time,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScheduleSlotPatch {
    pub doctor_id: Patch<i32>,
    pub cabinet_id: Patch<i32>,
    pub day_of_week: Patch<i32>,
    pub start_time: Patch<Time>,
    pub end_time: Patch<Time>,
}

impl References for NewScheduleSlot {
    fn reference(&self, field: &str) -> Option<i32> {
        match field {
            "doctor_id" => self.doctor_id,
            "cabinet_id" => self.cabinet_id,
            _ => None,
        }
    }
}

impl References for ScheduleSlotPatch {
    fn reference(&self, field: &str) -> Option<i32> {
        match field {
            "doctor_id" => self.doctor_id.as_value().copied(),
            "cabinet_id" => self.cabinet_id.as_value().copied(),
            _ => None,
        }
    }
}

impl Resource for Entity {
    type Create = NewScheduleSlot;
    type Patch = ScheduleSlotPatch;

    fn descriptor() -> &'static EntityDescriptor {
        &DESCRIPTOR
    }

    fn new_active_model(input: NewScheduleSlot) -> Result<ActiveModel, ModelError> {
        Ok(ActiveModel {
            id: NotSet,
            doctor_id: Set(input.doctor_id),
            cabinet_id: Set(input.cabinet_id),
            day_of_week: Set(check_day_of_week(input.day_of_week)?),
            start_time: Set(input.start_time),
            end_time: Set(input.end_time),
        })
    }

    fn apply_patch(patch: ScheduleSlotPatch, model: &mut ActiveModel) -> Result<(), ModelError> {
        if let Some(day) = patch.day_of_week.as_value() {
            check_day_of_week(*day)?;
        }
        patch.doctor_id.apply_nullable(&mut model.doctor_id);
        patch.cabinet_id.apply_nullable(&mut model.cabinet_id);
        patch.day_of_week.apply_required("day_of_week", &mut model.day_of_week)?;
        patch.start_time.apply_required("start_time", &mut model.start_time)?;
        patch.end_time.apply_required("end_time", &mut model.end_time)?;
        Ok(())
    }

    fn record_id(model: &Model) -> i32 {
        model.id
    }
}
