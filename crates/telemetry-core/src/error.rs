//! Shared error type across the telemetry crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Malformed or incomplete ingestion payload.
    ValidationFailed,
    /// Request exceeded the configured deadline.
    Timeout,
    /// Invalid configuration at startup.
    BadConfig,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::ValidationFailed => "VALIDATION_FAILED",
            ClientCode::Timeout => "TIMEOUT",
            ClientCode::BadConfig => "BAD_CONFIG",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TelemetryError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("request timed out")]
    Timeout,
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl TelemetryError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            TelemetryError::Validation(_) => ClientCode::ValidationFailed,
            TelemetryError::Timeout => ClientCode::Timeout,
            TelemetryError::BadConfig(_) => ClientCode::BadConfig,
            TelemetryError::Internal(_) => ClientCode::Internal,
        }
    }
}
