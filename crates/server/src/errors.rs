use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Error body: `{"error": title}` plus `detail` when there is something
/// safe to tell the client.
#[derive(Debug, Error)]
#[error("{status} {title}")]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", None)
    }

    pub fn invalid_id(rejection: PathRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid Id", Some(rejection.body_text()))
    }

    pub fn invalid_body(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), "Invalid Body", Some(rejection.body_text()))
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(msg) => {
                JsonApiError::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error", Some(msg))
            }
            ServiceError::NotFound { .. } => JsonApiError::not_found(),
            ServiceError::ConstraintViolation(msg) => {
                JsonApiError::new(StatusCode::CONFLICT, "Constraint Violation", Some(msg))
            }
            ServiceError::Db(msg) => {
                error!(error = %msg, "database error");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", None)
            }
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = match self.detail {
            Some(detail) => serde_json::json!({ "error": self.title, "detail": detail }),
            None => serde_json::json!({ "error": self.title }),
        };
        (self.status, Json(body)).into_response()
    }
}
