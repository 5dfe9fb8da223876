use axum::{http::StatusCode, routing::get, Json, Router};
use common::types::{Health, Welcome};
use models::{
    appointment, appointment_status, cabinet, department, diagnosis, doctor, insurance_policy,
    medical_record, patient, prescription, schedule, service_catalog, service_rendered,
    specialization,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{metrics, openapi};

pub mod records;

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

pub async fn root() -> Json<Welcome> {
    Json(Welcome { message: "Polyclinic records API. Documentation: /openapi.json" })
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics_text() -> (StatusCode, String) {
    metrics::encode_metrics()
}

async fn openapi_json() -> Json<&'static utoipa::openapi::OpenApi> {
    Json(openapi::document())
}

/// Build the full application router: system routes plus one route pair per record table.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/metrics", get(metrics_text))
        .route("/openapi.json", get(openapi_json))
        .merge(records::resource_routes::<department::Entity>())
        .merge(records::resource_routes::<specialization::Entity>())
        .merge(records::resource_routes::<cabinet::Entity>())
        .merge(records::resource_routes::<service_catalog::Entity>())
        .merge(records::resource_routes::<diagnosis::Entity>())
        .merge(records::resource_routes::<appointment_status::Entity>())
        .merge(records::resource_routes::<doctor::Entity>())
        .merge(records::resource_routes::<insurance_policy::Entity>())
        .merge(records::resource_routes::<patient::Entity>())
        .merge(records::resource_routes::<schedule::Entity>())
        .merge(records::resource_routes::<appointment::Entity>())
        .merge(records::resource_routes::<medical_record::Entity>())
        .merge(records::resource_routes::<prescription::Entity>())
        .merge(records::resource_routes::<service_rendered::Entity>())
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx responses are logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
