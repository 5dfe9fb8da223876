use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};
use service::errors::ServiceError;

pub static RECORD_OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "polyclinic_record_operations_total",
        "Record operations by entity, operation and outcome",
        &["entity", "operation", "outcome"]
    )
    .expect("register record_operations_total")
});

pub fn outcome<T>(result: &Result<T, ServiceError>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(ServiceError::Validation(_)) => "validation",
        Err(ServiceError::NotFound { .. }) => "not_found",
        Err(ServiceError::ConstraintViolation(_)) => "conflict",
        Err(ServiceError::Db(_)) => "error",
    }
}

pub fn observe(entity: &str, operation: &str, outcome: &str) {
    RECORD_OPERATIONS_TOTAL.with_label_values(&[entity, operation, outcome]).inc();
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_shows_up_in_text_output() {
        observe("Department", "create", "ok");
        let (status, body) = encode_metrics();
        assert_eq!(status, axum::http::StatusCode::OK);
        assert!(body.contains("polyclinic_record_operations_total"));
        assert!(body.contains(r#"entity="Department""#));
    }

    #[test]
    fn outcome_labels() {
        assert_eq!(outcome::<()>(&Ok(())), "ok");
        assert_eq!(outcome::<()>(&Err(ServiceError::not_found("Cabinet", 2))), "not_found");
        assert_eq!(outcome::<()>(&Err(ServiceError::ConstraintViolation(String::new()))), "conflict");
    }
}
