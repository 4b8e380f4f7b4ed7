use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::ErrorResponse;

/// KafkaBridgeError は REST API から返すエラー型。
#[derive(Debug, thiserror::Error)]
pub enum KafkaBridgeError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("publish failed: {0}")]
    Publish(String),
}

impl KafkaBridgeError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            KafkaBridgeError::Validation(_) => {
                (StatusCode::BAD_REQUEST, "SYS_KAFKA_BRIDGE_VALIDATION_ERROR")
            }
            KafkaBridgeError::Publish(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "SYS_KAFKA_BRIDGE_PUBLISH_FAILED",
            ),
        }
    }
}

impl IntoResponse for KafkaBridgeError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = ErrorResponse::new(code, self.to_string());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = KafkaBridgeError::Validation("missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_publish_maps_to_internal_error() {
        let err = KafkaBridgeError::Publish("broker unavailable".to_string());
        assert!(err.to_string().contains("broker unavailable"));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
