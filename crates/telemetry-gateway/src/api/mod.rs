//! Telemetry HTTP API.

pub mod error;
pub mod telemetry;

pub use error::ApiError;
