//! Top-level facade crate for the telemetry service.
//!
//! Re-exports the record model and the gateway library so users can depend on a single crate.

pub mod core {
    pub use telemetry_core::*;
}

pub mod gateway {
    pub use telemetry_gateway::*;
}
