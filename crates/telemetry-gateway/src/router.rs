//! Axum router wiring.
//!
//! Layer order (outermost first): instrumentation, request deadline, handler.
//! Instrumentation therefore observes the 408 produced by a timed-out request.

use axum::{middleware, routing::get, Router};

use crate::{api, app_state::AppState, obs, ops};

pub fn build_router(state: AppState) -> Router {
    instrument(routes(), state)
}

/// Route table without middleware.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(ops::root))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route(obs::middleware::METRICS_PATH, get(ops::metrics))
        .route(
            "/telemetry",
            get(api::telemetry::list).post(api::telemetry::ingest),
        )
}

/// Apply the request deadline and instrumentation layers, then bind state.
/// Routes must be added before this call to be covered.
pub fn instrument(routes: Router<AppState>, state: AppState) -> Router {
    routes
        .layer(middleware::from_fn_with_state(
            state.clone(),
            obs::middleware::enforce_timeout,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            obs::middleware::track_requests,
        ))
        .with_state(state)
}
