//! Service config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use telemetry_core::error::{Result, TelemetryError};

pub use schema::{GatewayConfig, GatewaySection, IngestSection};

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "TELEMETRY_CONFIG";
/// Config file used when `TELEMETRY_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "telemetry.yaml";

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| TelemetryError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| TelemetryError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path` if it exists, otherwise fall back to built-in defaults.
/// A present but invalid file is an error.
pub fn load_or_default(path: &str) -> Result<GatewayConfig> {
    if !Path::new(path).exists() {
        tracing::info!(%path, "config file not found, using defaults");
        return Ok(GatewayConfig::default());
    }
    load_from_file(path)
}

/// Resolve the config path from `TELEMETRY_CONFIG` and load it.
pub fn load_from_env() -> Result<GatewayConfig> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_or_default(&path)
}
