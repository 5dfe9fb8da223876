use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize, Serializer};

use crate::descriptor::{EntityDescriptor, EntityKind, FieldDescriptor as F, FieldType};
use crate::errors::ModelError;
use crate::patch::Patch;
use crate::resource::{References, Resource};

/// A billable service with its list price.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_catalog")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    #[serde(serialize_with = "serialize_money")]
    pub price: Decimal,
    pub duration_minutes: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::ServiceCatalogEntry,
    name: "ServiceCatalogEntry",
    table: "service_catalog",
    route: "services",
    tag: "Service catalog",
    fields: &[
        F::required("name", FieldType::Text),
        F::defaulted("price", FieldType::Decimal),
        F::required("duration_minutes", FieldType::Integer),
    ],
};

/// Prices are stored with two fraction digits.
fn money(price: Decimal) -> Decimal {
    price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Always two fraction digits on the wire, whatever scale storage returned.
fn serialize_money<S: Serializer>(price: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    let mut price = *price;
    price.rescale(2);
    Serialize::serialize(&price, serializer)
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewServiceCatalogEntry {
    pub name: String,
    #[serde(default)]
    pub price: Decimal,
    pub duration_minutes: i32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ServiceCatalogEntryPatch {
    pub name: Patch<String>,
    pub price: Patch<Decimal>,
    pub duration_minutes: Patch<i32>,
}

impl References for NewServiceCatalogEntry {}
impl References for ServiceCatalogEntryPatch {}

impl Resource for Entity {
    type Create = NewServiceCatalogEntry;
    type Patch = ServiceCatalogEntryPatch;

    fn descriptor() -> &'static EntityDescriptor {
        &DESCRIPTOR
    }

    fn new_active_model(input: NewServiceCatalogEntry) -> Result<ActiveModel, ModelError> {
        Ok(ActiveModel {
            id: NotSet,
            name: Set(input.name),
            price: Set(money(input.price)),
            duration_minutes: Set(input.duration_minutes),
        })
    }

    fn apply_patch(patch: ServiceCatalogEntryPatch, model: &mut ActiveModel) -> Result<(), ModelError> {
        patch.name.apply_required("name", &mut model.name)?;
        patch.price.map(money).apply_required("price", &mut model.price)?;
        patch.duration_minutes.apply_required("duration_minutes", &mut model.duration_minutes)?;
        Ok(())
    }

    fn record_id(model: &Model) -> i32 {
        model.id
    }
}
