use std::net::SocketAddr;

use axum::Router;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes::{self, ServerState};

fn cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

struct TestApp {
    base_url: String,
    client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post(&self, path: &str, body: Value) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.post(self.url(path)).json(&body).send().await?;
        Ok((res.status(), res.json().await?))
    }

    async fn patch(&self, path: &str, body: Value) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.patch(self.url(path)).json(&body).send().await?;
        Ok((res.status(), res.json().await?))
    }

    async fn get(&self, path: &str) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.get(self.url(path)).send().await?;
        Ok((res.status(), res.json().await?))
    }

    async fn delete(&self, path: &str) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.delete(self.url(path)).send().await?;
        Ok((res.status(), res.json().await?))
    }
}

/// Router over a private in-memory database on an ephemeral port.
async fn start_server() -> anyhow::Result<TestApp> {
    let db = models::db::connect_with_config(&DatabaseConfig::in_memory()).await?;
    migration::Migrator::up(&db, None).await?;

    let app: Router = routes::build_router(ServerState { db }, cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url, client: reqwest::Client::new() })
}

#[tokio::test]
async fn e2e_system_routes() -> anyhow::Result<()> {
    let app = start_server().await?;

    let (status, body) = app.get("/health").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, body) = app.get("/").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("/openapi.json"));

    let (status, doc) = app.get("/openapi.json").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert!(doc["paths"]["/medical_records/{id}"]["delete"].is_object());
    Ok(())
}

#[tokio::test]
async fn e2e_every_collection_starts_empty() -> anyhow::Result<()> {
    let app = start_server().await?;
    for route in [
        "departments", "specializations", "cabinets", "services", "diagnoses", "statuses", "doctors",
        "policies", "patients", "schedules", "appointments", "medical_records", "prescriptions",
        "services_rendered",
    ] {
        let (status, body) = app.get(&format!("/{route}")).await?;
        assert_eq!(status, HttpStatusCode::OK, "{route}");
        assert_eq!(body, json!([]), "{route}");
    }
    Ok(())
}

#[tokio::test]
async fn e2e_department_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;

    let (status, created) = app.post("/departments", json!({"name": "General"})).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(created, json!({"id": 1, "name": "General", "head_doctor_id": null}));

    let (status, fetched) = app.get("/departments/1").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(fetched, created);

    let (status, patched) = app.patch("/departments/1", json!({"head_doctor_id": 77})).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(patched["head_doctor_id"], 77);
    assert_eq!(patched["name"], "General");

    let (status, ack) = app.delete("/departments/1").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(ack, json!({"ok": true}));

    let (status, body) = app.get("/departments/1").await?;
    assert_eq!(status, HttpStatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not Found"}));

    let (status, _) = app.delete("/departments/1").await?;
    assert_eq!(status, HttpStatusCode::NOT_FOUND);
    let (status, _) = app.patch("/departments/1", json!({"name": "Surgery"})).await?;
    assert_eq!(status, HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_bad_ids_and_bodies() -> anyhow::Result<()> {
    let app = start_server().await?;

    let (status, body) = app.get("/doctors/abc").await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid Id");

    let (status, body) = app.post("/doctors", json!({"first_name": "Ivan"})).await?;
    assert_eq!(status, HttpStatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Invalid Body");

    let (status, _) = app
        .post("/schedules", json!({"day_of_week": 8, "start_time": "09:00:00", "end_time": "12:00:00"}))
        .await?;
    assert_eq!(status, HttpStatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn e2e_orphaned_doctor_keeps_department_id() -> anyhow::Result<()> {
    let app = start_server().await?;

    let (_, dep) = app.post("/departments", json!({"name": "General"})).await?;
    assert_eq!(dep["id"], 1);
    let (status, doc) = app
        .post("/doctors", json!({"last_name": "Ivanov", "first_name": "Ivan", "department_id": 1}))
        .await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(doc["id"], 1);

    let (_, patched) = app.patch("/doctors/1", json!({"category": "Senior"})).await?;
    assert_eq!(patched["department_id"], 1);
    assert_eq!(patched["category"], "Senior");

    let (status, _) = app.delete("/departments/1").await?;
    assert_eq!(status, HttpStatusCode::OK);

    let (status, orphan) = app.get("/doctors/1").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(orphan["department_id"], 1);
    Ok(())
}

#[tokio::test]
async fn e2e_reference_and_uniqueness_conflicts() -> anyhow::Result<()> {
    let app = start_server().await?;

    let (status, body) = app.post("/medical_records", json!({"appointment_id": 999})).await?;
    assert_eq!(status, HttpStatusCode::CONFLICT);
    assert_eq!(body["error"], "Constraint Violation");

    let (status, visit) = app.post("/appointments", json!({"datetime": "2030-01-01T10:00:00"})).await?;
    assert_eq!(status, HttpStatusCode::OK);
    let record = json!({"appointment_id": visit["id"], "complaints": "fever"});
    let (status, created) = app.post("/medical_records", record.clone()).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(created["complaints"], "fever");
    let (status, _) = app.post("/medical_records", record).await?;
    assert_eq!(status, HttpStatusCode::CONFLICT);
    Ok(())
}

#[tokio::test]
async fn e2e_null_semantics_in_patches() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (_, patient) = app
        .post(
            "/patients",
            json!({"last_name": "Petrov", "first_name": "Petr", "birth_date": "1990-05-15", "phone": "+79001234567"}),
        )
        .await?;
    let path = format!("/patients/{}", patient["id"]);

    let (status, cleared) = app.patch(&path, json!({"phone": null})).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(cleared["phone"], Value::Null);
    assert_eq!(cleared["birth_date"], "1990-05-15");

    let (status, body) = app.patch(&path, json!({"first_name": null})).await?;
    assert_eq!(status, HttpStatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation Error");
    Ok(())
}

#[tokio::test]
async fn e2e_prices_are_rounded_and_counted() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (status, svc) = app
        .post("/services", json!({"name": "Consultation", "price": "1500.499", "duration_minutes": 30}))
        .await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(svc["price"], "1500.50");

    let text = app.client.get(app.url("/metrics")).send().await?.text().await?;
    assert!(text.contains("polyclinic_record_operations_total"));
    assert!(text.contains(r#"entity="ServiceCatalogEntry""#));
    Ok(())
}

/// One minimal payload per collection, ordered so every reference points at an earlier row.
fn minimal_payloads() -> Vec<(&'static str, Value)> {
    vec![
        ("departments", json!({"name": "General"})),
        ("specializations", json!({"name": "Therapist"})),
        ("services", json!({"name": "Consultation", "price": "1500.25", "duration_minutes": 30})),
        ("diagnoses", json!({"mkb_code": "J10", "description": "Influenza"})),
        ("statuses", json!({"name": "Planned"})),
        ("cabinets", json!({"number": "101", "floor": 1, "department_id": 1})),
        ("doctors", json!({"last_name": "Ivanov", "first_name": "Ivan", "specialization_id": 1, "department_id": 1})),
        ("policies", json!({"policy_number": "1234567890", "company_name": "ROSNO", "expiration_date": "2030-01-01"})),
        ("patients", json!({"last_name": "Petrov", "first_name": "Petr", "birth_date": "1990-05-15", "policy_id": 1})),
        (
            "schedules",
            json!({"doctor_id": 1, "cabinet_id": 1, "day_of_week": 1, "start_time": "09:00:00", "end_time": "13:00:00"}),
        ),
        ("appointments", json!({"patient_id": 1, "doctor_id": 1, "datetime": "2024-03-01T10:00:00", "status_id": 1})),
        ("medical_records", json!({"appointment_id": 1, "complaints": "Fever", "diagnosis_id": 1})),
        ("prescriptions", json!({"record_id": 1, "drug_name": "Paracetamol", "dosage": "500 mg", "duration_days": 5})),
        ("services_rendered", json!({"record_id": 1, "service_id": 1, "quantity": 2})),
    ]
}

#[tokio::test]
async fn e2e_every_collection_round_trips() -> anyhow::Result<()> {
    let app = start_server().await?;

    for (route, payload) in minimal_payloads() {
        let (status, created) = app.post(&format!("/{route}"), payload.clone()).await?;
        assert_eq!(status, HttpStatusCode::OK, "create {route}: {created}");
        assert_eq!(created["id"], 1, "{route}");
        for (field, value) in payload.as_object().unwrap() {
            assert_eq!(&created[field], value, "{route}.{field}");
        }

        let (status, fetched) = app.get(&format!("/{route}/1")).await?;
        assert_eq!(status, HttpStatusCode::OK, "{route}");
        assert_eq!(fetched, created, "{route}");

        let (_, listed) = app.get(&format!("/{route}")).await?;
        assert_eq!(listed, json!([created]), "{route}");
    }
    Ok(())
}

#[tokio::test]
async fn e2e_missing_ids_are_not_found_everywhere() -> anyhow::Result<()> {
    let app = start_server().await?;
    let not_found = json!({"error": "Not Found"});

    for (route, _) in minimal_payloads() {
        let path = format!("/{route}/9999");

        let (status, body) = app.get(&path).await?;
        assert_eq!(status, HttpStatusCode::NOT_FOUND, "get {route}");
        assert_eq!(body, not_found, "get {route}");

        let (status, body) = app.patch(&path, json!({})).await?;
        assert_eq!(status, HttpStatusCode::NOT_FOUND, "patch {route}");
        assert_eq!(body, not_found, "patch {route}");

        let (status, body) = app.delete(&path).await?;
        assert_eq!(status, HttpStatusCode::NOT_FOUND, "delete {route}");
        assert_eq!(body, not_found, "delete {route}");
    }
    Ok(())
}

#[tokio::test]
async fn e2e_collections_accept_trailing_slash() -> anyhow::Result<()> {
    let app = start_server().await?;

    let (status, created) = app.post("/departments/", json!({"name": "General"})).await?;
    assert_eq!(status, HttpStatusCode::OK);
    let (status, listed) = app.get("/departments/").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(listed, json!([created]));
    Ok(())
}

#[tokio::test]
async fn e2e_appointment_times_accept_offsets() -> anyhow::Result<()> {
    let app = start_server().await?;

    let (status, visit) = app.post("/appointments", json!({"datetime": "2024-03-01T10:00:00Z"})).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(visit["datetime"], "2024-03-01T10:00:00");

    let path = format!("/appointments/{}", visit["id"]);
    let (status, moved) = app.patch(&path, json!({"datetime": "2024-03-02 11:30"})).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(moved["datetime"], "2024-03-02T11:30:00");
    Ok(())
}
