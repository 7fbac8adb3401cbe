//! Request instrumentation and request deadline.
//!
//! `track_requests` wraps every route except `/metrics`. The bookkeeping lives
//! in `RequestGuard::drop`, so the in-flight gauge and the duration histogram
//! are settled exactly once on every exit path: normal response, error
//! response, handler panic, or the future being dropped by a disconnecting
//! client. A panicking handler is turned into a 500 response here, since the
//! runtime would otherwise drop the request future only after unwinding ended.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{MatchedPath, Request, State},
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
};
use futures_util::FutureExt;

use telemetry_core::TelemetryError;

use crate::api::ApiError;
use crate::app_state::AppState;
use crate::obs::metrics::TelemetryMetrics;

/// Path excluded from self-measurement.
pub const METRICS_PATH: &str = "/metrics";

/// Label used when no route matched (keeps 404 scans from exploding cardinality).
const UNMATCHED_ENDPOINT: &str = "unmatched";

/// Status label for a request whose future was dropped before producing a response.
const CANCELLED_STATUS: &str = "499";

/// Scoped in-flight registration for one request.
pub struct RequestGuard {
    metrics: Arc<TelemetryMetrics>,
    method: Method,
    endpoint: String,
    started: Instant,
    status: Option<u16>,
}

impl RequestGuard {
    /// Increment the in-flight gauge and start the clock.
    pub fn enter(metrics: Arc<TelemetryMetrics>, method: Method, endpoint: String) -> Self {
        metrics.active_requests.inc();
        Self {
            metrics,
            method,
            endpoint,
            started: Instant::now(),
            status: None,
        }
    }

    /// Record the response status; the observation itself happens on drop.
    pub fn complete(mut self, status: u16) {
        self.status = Some(status);
    }
}

impl Drop for RequestGuard {
    fn drop(&mut self) {
        let elapsed = self.started.elapsed();
        let status = match self.status {
            Some(code) => code.to_string(),
            None if std::thread::panicking() => "500".to_string(),
            None => CANCELLED_STATUS.to_string(),
        };
        self.metrics.request_duration.observe(
            &[
                ("method", self.method.as_str()),
                ("endpoint", &self.endpoint),
                ("status", &status),
            ],
            elapsed,
        );
        self.metrics.active_requests.dec();
    }
}

pub async fn track_requests(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if request.uri().path() == METRICS_PATH {
        return next.run(request).await;
    }

    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_ENDPOINT.to_string());

    let guard = RequestGuard::enter(state.metrics(), request.method().clone(), endpoint);
    let response = match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(_) => {
            tracing::error!(endpoint = %guard.endpoint, "handler panicked");
            ApiError(TelemetryError::Internal("handler panicked".into())).into_response()
        }
    };
    guard.complete(response.status().as_u16());
    response
}

/// Fail requests that outlive `gateway.request_timeout_ms` with 408.
pub async fn enforce_timeout(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let limit: Duration = state.cfg().gateway.request_timeout();
    let path = request.uri().path().to_string();
    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::warn!(%path, timeout_ms = limit.as_millis() as u64, "request timed out");
            ApiError(TelemetryError::Timeout).into_response()
        }
    }
}
