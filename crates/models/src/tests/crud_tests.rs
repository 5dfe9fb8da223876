use std::str::FromStr;

use anyhow::Result;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::prelude::{Date, DateTime, Decimal, Time};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait};

use crate::db::connect_with_config;
use crate::resource::Resource;
use crate::{
    appointment, department, doctor, insurance_policy, medical_record, patient, schedule,
    service_catalog, service_rendered,
};

async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

async fn insert<E: Resource>(db: &DatabaseConnection, json: &str) -> Result<E::Model>
where
    E::Model: sea_orm::IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E> + Send,
{
    let input: E::Create = serde_json::from_str(json)?;
    let am = E::new_active_model(input)?;
    Ok(am.insert(db).await?)
}

#[tokio::test]
async fn department_and_doctor_round_trip() -> Result<()> {
    let db = setup_test_db().await?;

    let dep = insert::<department::Entity>(&db, r#"{"name": "General"}"#).await?;
    assert_eq!(dep.id, 1);
    assert_eq!(dep.head_doctor_id, None);

    let doc = insert::<doctor::Entity>(
        &db,
        r#"{"last_name": "Ivanov", "first_name": "Ivan", "department_id": 1}"#,
    )
    .await?;
    let found = doctor::Entity::find_by_id(doc.id).one(&db).await?.unwrap();
    assert_eq!(found, doc);

    let linked = found.find_related(department::Entity).one(&db).await?.unwrap();
    assert_eq!(linked.name, "General");
    Ok(())
}

#[tokio::test]
async fn typed_columns_survive_storage() -> Result<()> {
    let db = setup_test_db().await?;

    let svc = insert::<service_catalog::Entity>(
        &db,
        r#"{"name": "Consultation", "price": "1500.5", "duration_minutes": 30}"#,
    )
    .await?;
    assert_eq!(svc.price.round_dp(2), Decimal::from_str("1500.50")?);

    let policy = insert::<insurance_policy::Entity>(
        &db,
        r#"{"policy_number": "1234567890", "company_name": "ROSNO", "expiration_date": "2030-01-01"}"#,
    )
    .await?;
    assert_eq!(policy.expiration_date, Date::from_ymd_opt(2030, 1, 1).unwrap());

    let slot = insert::<schedule::Entity>(
        &db,
        r#"{"day_of_week": 1, "start_time": "09:00:00", "end_time": "13:30:00"}"#,
    )
    .await?;
    assert_eq!(slot.end_time, Time::from_hms_opt(13, 30, 0).unwrap());

    let visit = insert::<appointment::Entity>(&db, r#"{"datetime": "2024-03-01T10:00:00"}"#).await?;
    assert_eq!(visit.datetime, DateTime::from_str("2024-03-01T10:00:00")?);

    let billed = insert::<service_rendered::Entity>(&db, r#"{"service_id": 1}"#).await?;
    assert_eq!(billed.quantity, 1);
    Ok(())
}

#[tokio::test]
async fn one_patient_per_policy() -> Result<()> {
    let db = setup_test_db().await?;
    let first = r#"{"last_name": "Petrov", "first_name": "Petr", "birth_date": "1990-05-15", "policy_id": 1}"#;
    insert::<patient::Entity>(&db, first).await?;
    let second = r#"{"last_name": "Sidorov", "first_name": "Sidor", "birth_date": "1985-01-02", "policy_id": 1}"#;
    assert!(insert::<patient::Entity>(&db, second).await.is_err());

    // NULL policies are not constrained.
    let unlinked = r#"{"last_name": "Smirnov", "first_name": "Oleg", "birth_date": "1970-07-07"}"#;
    insert::<patient::Entity>(&db, unlinked).await?;
    insert::<patient::Entity>(&db, unlinked).await?;
    Ok(())
}

#[tokio::test]
async fn one_medical_record_per_appointment() -> Result<()> {
    let db = setup_test_db().await?;
    insert::<medical_record::Entity>(&db, r#"{"appointment_id": 5}"#).await?;
    assert!(insert::<medical_record::Entity>(&db, r#"{"appointment_id": 5}"#).await.is_err());
    Ok(())
}
