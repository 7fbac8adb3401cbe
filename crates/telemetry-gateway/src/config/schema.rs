use std::time::Duration;

use serde::Deserialize;
use telemetry_core::error::{Result, TelemetryError};
use telemetry_core::TimestampFormat;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub ingest: IngestSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
            ingest: IngestSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TelemetryError::BadConfig(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.gateway.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// How long `/readyz` reports draining before the listener closes.
    #[serde(default = "default_drain_delay_ms")]
    pub drain_delay_ms: u64,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            request_timeout_ms: default_request_timeout_ms(),
            drain_delay_ms: default_drain_delay_ms(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.parse::<std::net::SocketAddr>().is_err() {
            return Err(TelemetryError::BadConfig(format!(
                "gateway.listen must be a valid socket address (got {:?})",
                self.listen
            )));
        }
        if !(100..=300_000).contains(&self.request_timeout_ms) {
            return Err(TelemetryError::BadConfig(
                "gateway.request_timeout_ms must be between 100 and 300000".into(),
            ));
        }
        if self.drain_delay_ms > 60_000 {
            return Err(TelemetryError::BadConfig(
                "gateway.drain_delay_ms must be at most 60000".into(),
            ));
        }
        Ok(())
    }

    pub fn drain_delay(&self) -> Duration {
        Duration::from_millis(self.drain_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

fn default_listen() -> String {
    "0.0.0.0:8000".into()
}
fn default_request_timeout_ms() -> u64 {
    30_000
}
fn default_drain_delay_ms() -> u64 {
    2_000
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IngestSection {
    #[serde(default)]
    pub timestamp_format: TimestampFormat,
}
