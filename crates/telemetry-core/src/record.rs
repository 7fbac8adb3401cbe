//! Telemetry record model (JSON).
//!
//! `TelemetryIn` is the wire shape accepted by the ingestion endpoint. It is
//! turned into an immutable `TelemetryRecord` only after `into_record` checks
//! the semantic rules serde cannot express (non-empty source, timestamp format).

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TelemetryError};

/// Status assigned when the payload omits `status` or sends `null`.
pub const DEFAULT_STATUS: &str = "ok";

/// Accepted timestamp formats for ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampFormat {
    /// RFC 3339 (the ISO-8601 profile used on the wire).
    #[default]
    Rfc3339,
    /// Any string is accepted as-is.
    Any,
}

/// Ingestion payload. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryIn {
    /// Reporting device/sensor id.
    pub source: String,
    /// Instant of the reading, kept verbatim.
    pub timestamp: String,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    #[serde(default)]
    pub status: Option<String>,
}

impl TelemetryIn {
    /// Validate and freeze into a stored record.
    pub fn into_record(self, format: TimestampFormat) -> Result<TelemetryRecord> {
        if self.source.trim().is_empty() {
            return Err(TelemetryError::Validation("source must not be empty".into()));
        }

        if format == TimestampFormat::Rfc3339 {
            DateTime::parse_from_rfc3339(&self.timestamp).map_err(|e| {
                TelemetryError::Validation(format!(
                    "timestamp must be RFC 3339 (got {:?}): {e}",
                    self.timestamp
                ))
            })?;
        }

        if !self.temperature_c.is_finite() || !self.humidity_pct.is_finite() {
            return Err(TelemetryError::Validation(
                "temperature_c and humidity_pct must be finite".into(),
            ));
        }

        Ok(TelemetryRecord {
            source: self.source,
            timestamp: self.timestamp,
            temperature_c: self.temperature_c,
            humidity_pct: self.humidity_pct,
            status: self.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        })
    }
}

/// One accepted reading. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    pub source: String,
    pub timestamp: String,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub status: String,
}
