use async_trait::async_trait;
use tokio::sync::RwLock;

use telemetry_core::{Result, TelemetryRecord};

use super::TelemetryStore;

/// Append-only in-memory log.
///
/// Writers hold the lock only for a `push`; readers hold it for one clone of
/// the vector, so a snapshot is always a prefix of completed appends.
#[derive(Debug, Default)]
pub struct InMemoryTelemetryStore {
    records: RwLock<Vec<TelemetryRecord>>,
}

impl InMemoryTelemetryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TelemetryStore for InMemoryTelemetryStore {
    async fn append(&self, record: TelemetryRecord) -> Result<()> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<TelemetryRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}
