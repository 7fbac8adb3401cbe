//! HTTP mapping for `TelemetryError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use telemetry_core::TelemetryError;

/// Axum-facing wrapper; the core error type stays transport-free.
#[derive(Debug)]
pub struct ApiError(pub TelemetryError);

impl From<TelemetryError> for ApiError {
    fn from(e: TelemetryError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, message) = match &err {
            TelemetryError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            TelemetryError::Timeout => (StatusCode::REQUEST_TIMEOUT, err.to_string()),
            TelemetryError::BadConfig(_) | TelemetryError::Internal(_) => {
                tracing::error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        let body = Json(json!({
            "status": "error",
            "code": err.client_code().as_str(),
            "message": message,
        }));
        (status, body).into_response()
    }
}
