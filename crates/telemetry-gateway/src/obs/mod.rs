//! In-process metrics and request instrumentation.
//!
//! Metrics are stored as atomics and rendered by the `/metrics` handler in the
//! Prometheus text format.

pub mod metrics;
pub mod middleware;
