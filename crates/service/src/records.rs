//! Create, list, get, partial update and delete for any [`Resource`].

use std::marker::PhantomData;

use models::resource::Resource;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, IntoActiveModel, PrimaryKeyTrait,
    TransactionTrait,
};
use serde::Serialize;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::integrity::{ensure_references, pending_references};

/// Record operations for one table. Cheap to clone; the connection is a pool handle.
pub struct RecordService<E> {
    db: DatabaseConnection,
    entity: PhantomData<fn() -> E>,
}

impl<E> Clone for RecordService<E> {
    fn clone(&self) -> Self {
        Self { db: self.db.clone(), entity: PhantomData }
    }
}

impl<E> RecordService<E>
where
    E: Resource,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + Send + Sync,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db, entity: PhantomData }
    }

    fn entity_name() -> &'static str {
        E::descriptor().name
    }

    #[instrument(skip(self, input), fields(entity = Self::entity_name()))]
    pub async fn create(&self, input: E::Create) -> Result<E::Model, ServiceError> {
        let refs = pending_references(E::descriptor(), &input);
        let active = E::new_active_model(input)?;

        let txn = self.db.begin().await?;
        ensure_references(&txn, E::descriptor(), &refs).await?;
        let model = active.insert(&txn).await?;
        txn.commit().await?;

        info!(id = E::record_id(&model), "record created");
        Ok(model)
    }

    /// Every row in storage order.
    pub async fn list(&self) -> Result<Vec<E::Model>, ServiceError> {
        Ok(E::find().all(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> Result<E::Model, ServiceError> {
        E::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found(Self::entity_name(), id))
    }

    /// Overwrite the fields present in `patch`; absent fields keep their value.
    #[instrument(skip(self, patch), fields(entity = Self::entity_name()))]
    pub async fn update(&self, id: i32, patch: E::Patch) -> Result<E::Model, ServiceError> {
        let refs = pending_references(E::descriptor(), &patch);

        let txn = self.db.begin().await?;
        let existing = E::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found(Self::entity_name(), id))?;

        let mut active = existing.clone().into_active_model();
        E::apply_patch(patch, &mut active)?;
        if !active.is_changed() {
            txn.commit().await?;
            return Ok(existing);
        }
        ensure_references(&txn, E::descriptor(), &refs).await?;

        let updated = active.update(&txn).await.map_err(|err| match err {
            DbErr::RecordNotUpdated => ServiceError::not_found(Self::entity_name(), id),
            other => other.into(),
        })?;
        txn.commit().await?;

        info!("record updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(entity = Self::entity_name()))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;
        let res = E::delete_by_id(id).exec(&txn).await?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found(Self::entity_name(), id));
        }
        txn.commit().await?;

        info!("record deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use models::patch::Patch;
    use models::{department, doctor, medical_record, patient, schedule, service_catalog};
    use rust_decimal::Decimal;

    use super::*;
    use crate::test_support::get_db;

    fn json<T: serde::de::DeserializeOwned>(raw: &str) -> T {
        serde_json::from_str(raw).unwrap()
    }

    #[tokio::test]
    async fn get_returns_what_create_stored() -> anyhow::Result<()> {
        let db = get_db().await?;
        let patients = RecordService::<patient::Entity>::new(db);

        let created = patients
            .create(json(
                r#"{"last_name": "Petrov", "first_name": "Petr", "birth_date": "1990-05-15", "phone": "+79001234567"}"#,
            ))
            .await?;
        assert_eq!(patients.get(created.id).await?, created);
        assert_eq!(created.middle_name, None);
        Ok(())
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() -> anyhow::Result<()> {
        let db = get_db().await?;
        let departments = RecordService::<department::Entity>::new(db);

        assert!(matches!(departments.get(99).await, Err(ServiceError::NotFound { id: 99, .. })));
        let patch = json(r#"{"name": "Surgery"}"#);
        assert!(matches!(departments.update(99, patch).await, Err(ServiceError::NotFound { .. })));
        assert!(matches!(departments.delete(99).await, Err(ServiceError::NotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn disjoint_patches_compose() -> anyhow::Result<()> {
        let db = get_db().await?;
        let doctors = RecordService::<doctor::Entity>::new(db);
        let doc = doctors.create(json(r#"{"last_name": "Ivanov", "first_name": "Ivan"}"#)).await?;

        doctors.update(doc.id, json(r#"{"category": "Senior"}"#)).await?;
        let after = doctors.update(doc.id, json(r#"{"middle_name": "Ivanovich"}"#)).await?;

        assert_eq!(after.category.as_deref(), Some("Senior"));
        assert_eq!(after.middle_name.as_deref(), Some("Ivanovich"));
        assert_eq!(after.last_name, "Ivanov");
        Ok(())
    }

    #[tokio::test]
    async fn repeating_a_patch_changes_nothing() -> anyhow::Result<()> {
        let db = get_db().await?;
        let services = RecordService::<service_catalog::Entity>::new(db);
        let svc = services
            .create(json(r#"{"name": "Consultation", "price": "1500.25", "duration_minutes": 30}"#))
            .await?;

        let once = services.update(svc.id, json(r#"{"price": "1750.755"}"#)).await?;
        let twice = services.update(svc.id, json(r#"{"price": "1750.755"}"#)).await?;
        assert_eq!(once, twice);
        assert_eq!(twice.price.round_dp(2), Decimal::from_str("1750.76")?);
        Ok(())
    }

    #[tokio::test]
    async fn empty_patch_returns_row_unchanged() -> anyhow::Result<()> {
        let db = get_db().await?;
        let departments = RecordService::<department::Entity>::new(db);
        let dep = departments.create(json(r#"{"name": "General"}"#)).await?;
        assert_eq!(departments.update(dep.id, Default::default()).await?, dep);
        Ok(())
    }

    #[tokio::test]
    async fn delete_is_permanent_and_list_follows() -> anyhow::Result<()> {
        let db = get_db().await?;
        let departments = RecordService::<department::Entity>::new(db);
        let a = departments.create(json(r#"{"name": "General"}"#)).await?;
        let b = departments.create(json(r#"{"name": "Surgery"}"#)).await?;
        let c = departments.create(json(r#"{"name": "Pediatrics"}"#)).await?;

        departments.delete(b.id).await?;
        assert!(matches!(departments.get(b.id).await, Err(ServiceError::NotFound { .. })));
        assert!(matches!(departments.delete(b.id).await, Err(ServiceError::NotFound { .. })));

        let mut ids: Vec<i32> = departments.list().await?.into_iter().map(|d| d.id).collect();
        ids.sort();
        assert_eq!(ids, vec![a.id, c.id]);
        Ok(())
    }

    #[tokio::test]
    async fn deleting_a_department_orphans_its_doctors() -> anyhow::Result<()> {
        let db = get_db().await?;
        let departments = RecordService::<department::Entity>::new(db.clone());
        let doctors = RecordService::<doctor::Entity>::new(db);

        let dep = departments.create(json(r#"{"name": "General"}"#)).await?;
        assert_eq!(dep.id, 1);
        let doc = doctors
            .create(json(r#"{"last_name": "Ivanov", "first_name": "Ivan", "department_id": 1}"#))
            .await?;
        assert_eq!(doc.id, 1);

        let patched = doctors.update(1, json(r#"{"category": "Senior"}"#)).await?;
        assert_eq!(patched.department_id, Some(1));

        departments.delete(1).await?;
        let orphan = doctors.get(1).await?;
        assert_eq!(orphan.department_id, Some(1));
        assert_eq!(orphan.category.as_deref(), Some("Senior"));

        // Untouched references are not re-checked.
        doctors.update(1, json(r#"{"first_name": "Ivan"}"#)).await?;
        // Writing the dangling id again is.
        let err = doctors.update(1, json(r#"{"department_id": 1}"#)).await.unwrap_err();
        assert!(matches!(err, ServiceError::ConstraintViolation(_)));
        Ok(())
    }

    #[tokio::test]
    async fn medical_record_needs_an_existing_appointment() -> anyhow::Result<()> {
        let db = get_db().await?;
        let records = RecordService::<medical_record::Entity>::new(db);
        let err = records.create(json(r#"{"appointment_id": 999}"#)).await.unwrap_err();
        assert!(matches!(err, ServiceError::ConstraintViolation(_)));
        assert!(records.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn second_record_for_an_appointment_is_rejected() -> anyhow::Result<()> {
        let db = get_db().await?;
        let appointments = RecordService::<models::appointment::Entity>::new(db.clone());
        let records = RecordService::<medical_record::Entity>::new(db);

        let visit = appointments.create(json(r#"{"datetime": "2024-03-01T10:00:00"}"#)).await?;
        let payload = format!(r#"{{"appointment_id": {}}}"#, visit.id);
        records.create(json(&payload)).await?;
        let err = records.create(json(&payload)).await.unwrap_err();
        assert!(matches!(err, ServiceError::ConstraintViolation(_)));
        Ok(())
    }

    #[tokio::test]
    async fn null_clears_optional_but_not_required_fields() -> anyhow::Result<()> {
        let db = get_db().await?;
        let patients = RecordService::<patient::Entity>::new(db);
        let p = patients
            .create(json(
                r#"{"last_name": "Petrov", "first_name": "Petr", "birth_date": "1990-05-15", "phone": "+79001234567"}"#,
            ))
            .await?;

        let cleared = patients.update(p.id, json(r#"{"phone": null}"#)).await?;
        assert_eq!(cleared.phone, None);
        assert_eq!(cleared.first_name, "Petr");

        let err = patients.update(p.id, json(r#"{"last_name": null}"#)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(patients.get(p.id).await?.last_name, "Petrov");
        Ok(())
    }

    #[tokio::test]
    async fn schedule_day_is_checked_on_every_write() -> anyhow::Result<()> {
        let db = get_db().await?;
        let slots = RecordService::<schedule::Entity>::new(db);

        let err = slots
            .create(json(r#"{"day_of_week": 0, "start_time": "09:00:00", "end_time": "12:00:00"}"#))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let slot = slots
            .create(json(r#"{"day_of_week": 3, "start_time": "09:00:00", "end_time": "12:00:00"}"#))
            .await?;
        let patch = schedule::ScheduleSlotPatch { day_of_week: Patch::Value(9), ..Default::default() };
        assert!(matches!(slots.update(slot.id, patch).await, Err(ServiceError::Validation(_))));
        Ok(())
    }
}
