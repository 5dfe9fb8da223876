//! Existence checks for reference fields.
//!
//! Tables carry no storage-level foreign keys, so deleting a row never
//! cascades or nulls out referencing rows. Instead every write that sets an
//! enforced reference to a non-null id checks the target row inside the same
//! transaction.

use models::descriptor::{EntityDescriptor, EntityKind};
use models::resource::References;
use models::{
    appointment, appointment_status, cabinet, department, diagnosis, doctor, insurance_policy,
    medical_record, patient, prescription, schedule, service_catalog, service_rendered,
    specialization,
};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PrimaryKeyTrait};
use tracing::warn;

use crate::errors::ServiceError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingReference {
    pub field: &'static str,
    pub target: EntityKind,
    pub id: i32,
}

/// Reference values a payload writes, in descriptor field order.
pub fn pending_references(descriptor: &EntityDescriptor, payload: &impl References) -> Vec<PendingReference> {
    descriptor
        .enforced_references()
        .filter_map(|(field, target)| {
            payload
                .reference(field.name)
                .map(|id| PendingReference { field: field.name, target, id })
        })
        .collect()
}

pub async fn ensure_references<C>(
    conn: &C,
    owner: &EntityDescriptor,
    refs: &[PendingReference],
) -> Result<(), ServiceError>
where
    C: ConnectionTrait,
{
    for r in refs {
        if !exists(conn, r.target, r.id).await? {
            warn!(entity = owner.name, field = r.field, target = %r.target, id = r.id, "dangling reference rejected");
            return Err(ServiceError::ConstraintViolation(format!(
                "{}.{} references missing {} {}",
                owner.name, r.field, r.target, r.id
            )));
        }
    }
    Ok(())
}

pub async fn exists<C>(conn: &C, kind: EntityKind, id: i32) -> Result<bool, DbErr>
where
    C: ConnectionTrait,
{
    match kind {
        EntityKind::Department => row_exists::<department::Entity, C>(conn, id).await,
        EntityKind::Specialization => row_exists::<specialization::Entity, C>(conn, id).await,
        EntityKind::ServiceCatalogEntry => row_exists::<service_catalog::Entity, C>(conn, id).await,
        EntityKind::Diagnosis => row_exists::<diagnosis::Entity, C>(conn, id).await,
        EntityKind::AppointmentStatus => row_exists::<appointment_status::Entity, C>(conn, id).await,
        EntityKind::Cabinet => row_exists::<cabinet::Entity, C>(conn, id).await,
        EntityKind::Doctor => row_exists::<doctor::Entity, C>(conn, id).await,
        EntityKind::InsurancePolicy => row_exists::<insurance_policy::Entity, C>(conn, id).await,
        EntityKind::Patient => row_exists::<patient::Entity, C>(conn, id).await,
        EntityKind::ScheduleSlot => row_exists::<schedule::Entity, C>(conn, id).await,
        EntityKind::Appointment => row_exists::<appointment::Entity, C>(conn, id).await,
        EntityKind::MedicalRecord => row_exists::<medical_record::Entity, C>(conn, id).await,
        EntityKind::Prescription => row_exists::<prescription::Entity, C>(conn, id).await,
        EntityKind::ServiceRendered => row_exists::<service_rendered::Entity, C>(conn, id).await,
    }
}

async fn row_exists<E, C>(conn: &C, id: i32) -> Result<bool, DbErr>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    C: ConnectionTrait,
{
    Ok(E::find_by_id(id).one(conn).await?.is_some())
}

#[cfg(test)]
mod tests {
    use models::doctor::{DoctorPatch, NewDoctor};
    use models::patch::Patch;

    use super::*;
    use crate::test_support::get_db;

    #[test]
    fn collects_only_set_references() {
        let input = NewDoctor {
            last_name: "Ivanov".into(),
            first_name: "Ivan".into(),
            middle_name: None,
            specialization_id: None,
            department_id: Some(3),
            category: None,
        };
        let refs = pending_references(&doctor::DESCRIPTOR, &input);
        assert_eq!(refs, vec![PendingReference { field: "department_id", target: EntityKind::Department, id: 3 }]);

        let patch = DoctorPatch { specialization_id: Patch::Null, ..Default::default() };
        assert!(pending_references(&doctor::DESCRIPTOR, &patch).is_empty());
    }

    #[tokio::test]
    async fn missing_target_is_a_constraint_violation() -> anyhow::Result<()> {
        let db = get_db().await?;
        assert!(!exists(&db, EntityKind::Appointment, 42).await?);

        let refs = [PendingReference { field: "appointment_id", target: EntityKind::Appointment, id: 42 }];
        let err = ensure_references(&db, &medical_record::DESCRIPTOR, &refs).await.unwrap_err();
        assert!(matches!(err, ServiceError::ConstraintViolation(msg) if msg.contains("Appointment 42")));
        Ok(())
    }
}
