//! Shared application state for the telemetry service.
//!
//! Replaces process globals: every `AppState::new` builds a fresh store and
//! metrics registry, so tests get an isolated context per instance.

use std::sync::Arc;

use telemetry_core::error::Result;

use crate::config::GatewayConfig;
use crate::obs::metrics::TelemetryMetrics;
use crate::store::{InMemoryTelemetryStore, TelemetryStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    store: Arc<dyn TelemetryStore>,
    metrics: Arc<TelemetryMetrics>,
}

struct AppStateInner {
    cfg: GatewayConfig,
}

impl AppState {
    /// Build application state backed by the in-memory store.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        Self::with_store(cfg, Arc::new(InMemoryTelemetryStore::new()))
    }

    /// Build application state over a caller-provided store.
    pub fn with_store(cfg: GatewayConfig, store: Arc<dyn TelemetryStore>) -> Result<Self> {
        cfg.validate()?;
        Ok(Self {
            inner: Arc::new(AppStateInner { cfg }),
            store,
            metrics: Arc::new(TelemetryMetrics::new()),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> Arc<dyn TelemetryStore> {
        Arc::clone(&self.store)
    }

    pub fn metrics(&self) -> Arc<TelemetryMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }

    /// Flip readiness off ahead of graceful shutdown.
    pub fn begin_drain(&self) {
        self.metrics.set_draining();
        tracing::info!("draining: readiness now reports unavailable");
    }

    /// Fail readiness, then hold the listener open for `gateway.drain_delay_ms`
    /// so load balancers polling `/readyz` on new connections see the 503.
    pub async fn drain(&self) {
        self.begin_drain();
        let delay = self.cfg().gateway.drain_delay();
        if !delay.is_zero() {
            tracing::info!(delay_ms = delay.as_millis() as u64, "waiting before closing listener");
            tokio::time::sleep(delay).await;
        }
    }

    /// Gauges computed at scrape time.
    pub async fn metrics_extra(&self) -> Vec<(&'static str, &'static str, u64)> {
        let records = self.store.len().await as u64;
        vec![(
            "telemetry_store_records",
            "Telemetry records currently held in memory",
            records,
        )]
    }
}
