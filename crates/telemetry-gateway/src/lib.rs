//! Telemetry gateway library entry.
//!
//! This crate wires configuration, the telemetry store, the metrics registry,
//! request instrumentation, and the HTTP handlers into one axum application.
//! It is consumed by the binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod store;
