//! Telemetry core: the record model, ingestion validation, and the error
//! surface shared by the gateway and its tests.
//!
//! This crate carries no transport or runtime dependencies so the record
//! contract can be reused outside the HTTP service.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `TelemetryError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod record;

/// Shared result type.
pub use error::{Result, TelemetryError};
pub use record::{TelemetryIn, TelemetryRecord, TimestampFormat};
