//! Demo data for an empty database.

use chrono::{Duration, Local, NaiveTime};
use models::{
    appointment, appointment_status, cabinet, department, diagnosis, doctor, insurance_policy,
    patient, specialization,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::info;

use crate::errors::ServiceError;
use crate::records::RecordService;

/// Insert a small consistent data set through the record services.
/// Returns `false` without writing when any department already exists.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<bool, ServiceError> {
    if department::Entity::find().count(db).await? > 0 {
        info!("departments present, demo data skipped");
        return Ok(false);
    }

    let specializations = RecordService::<specialization::Entity>::new(db.clone());
    let therapist = specializations
        .create(specialization::NewSpecialization { name: "Терапевт".into() })
        .await?;
    specializations
        .create(specialization::NewSpecialization { name: "Хирург".into() })
        .await?;

    let general = RecordService::<department::Entity>::new(db.clone())
        .create(department::NewDepartment { name: "Общее отделение".into(), head_doctor_id: None })
        .await?;

    let statuses = RecordService::<appointment_status::Entity>::new(db.clone());
    let planned = statuses
        .create(appointment_status::NewAppointmentStatus { name: "Запланирован".into() })
        .await?;
    statuses
        .create(appointment_status::NewAppointmentStatus { name: "Завершен".into() })
        .await?;

    RecordService::<diagnosis::Entity>::new(db.clone())
        .create(diagnosis::NewDiagnosis { mkb_code: "J10".into(), description: Some("Грипп".into()) })
        .await?;

    RecordService::<cabinet::Entity>::new(db.clone())
        .create(cabinet::NewCabinet { number: "101".into(), floor: 1, department_id: Some(general.id) })
        .await?;

    let ivanov = RecordService::<doctor::Entity>::new(db.clone())
        .create(doctor::NewDoctor {
            last_name: "Иванов".into(),
            first_name: "Иван".into(),
            middle_name: Some("Иванович".into()),
            specialization_id: Some(therapist.id),
            department_id: Some(general.id),
            category: Some("Высшая".into()),
        })
        .await?;

    let expiration = chrono::NaiveDate::from_ymd_opt(2030, 1, 1)
        .ok_or_else(|| ServiceError::Validation("bad policy expiration date".into()))?;
    let policy = RecordService::<insurance_policy::Entity>::new(db.clone())
        .create(insurance_policy::NewInsurancePolicy {
            policy_number: "1234567890".into(),
            company_name: "РОСНО".into(),
            expiration_date: expiration,
        })
        .await?;

    let birth_date = chrono::NaiveDate::from_ymd_opt(1990, 5, 15)
        .ok_or_else(|| ServiceError::Validation("bad birth date".into()))?;
    let petrov = RecordService::<patient::Entity>::new(db.clone())
        .create(patient::NewPatient {
            last_name: "Петров".into(),
            first_name: "Петр".into(),
            middle_name: None,
            birth_date,
            phone: Some("+79001234567".into()),
            address: None,
            policy_id: Some(policy.id),
        })
        .await?;

    // Tomorrow, 10:00 local time.
    let ten = NaiveTime::from_hms_opt(10, 0, 0).unwrap_or_default();
    let when = (Local::now() + Duration::days(1)).date_naive().and_time(ten);
    RecordService::<appointment::Entity>::new(db.clone())
        .create(appointment::NewAppointment {
            patient_id: Some(petrov.id),
            doctor_id: Some(ivanov.id),
            datetime: when,
            status_id: Some(planned.id),
        })
        .await?;

    info!(appointment_at = %when, "demo data seeded");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn seeds_once() -> anyhow::Result<()> {
        let db = get_db().await?;
        assert!(seed_demo_data(&db).await?);
        assert!(!seed_demo_data(&db).await?);

        assert_eq!(specialization::Entity::find().count(&db).await?, 2);
        assert_eq!(department::Entity::find().count(&db).await?, 1);

        let visits = appointment::Entity::find().all(&db).await?;
        assert_eq!(visits.len(), 1);
        let visit = &visits[0];
        assert!(visit.patient_id.is_some() && visit.doctor_id.is_some() && visit.status_id.is_some());
        assert_eq!(visit.datetime.time(), NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        Ok(())
    }
}
