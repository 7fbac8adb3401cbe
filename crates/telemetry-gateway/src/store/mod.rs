//! Telemetry storage seam.
//!
//! Handlers only see `Arc<dyn TelemetryStore>`; the in-process append log is
//! the sole implementation. It is unbounded: memory grows with every accepted
//! record until the process exits.

pub mod memory;

use async_trait::async_trait;
use telemetry_core::{Result, TelemetryRecord};

pub use memory::InMemoryTelemetryStore;

#[async_trait]
pub trait TelemetryStore: Send + Sync {
    /// Append one record. Concurrent appends are never lost.
    async fn append(&self, record: TelemetryRecord) -> Result<()>;

    /// Snapshot of every stored record, in insertion order.
    async fn list_all(&self) -> Result<Vec<TelemetryRecord>>;

    /// Number of stored records.
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
