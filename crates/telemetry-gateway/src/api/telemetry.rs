//! Ingestion and query endpoints for `/telemetry`.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};

use telemetry_core::{TelemetryError, TelemetryIn, TelemetryRecord};

use crate::api::error::ApiError;
use crate::app_state::AppState;

/// `GET /telemetry`: every stored record, oldest first.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<TelemetryRecord>>, ApiError> {
    let records = state.store().list_all().await?;
    Ok(Json(records))
}

/// `POST /telemetry`: validate, append, count.
///
/// Validation happens before the store is touched; the counter is bumped
/// only after the append succeeded.
pub async fn ingest(
    State(state): State<AppState>,
    payload: Result<Json<TelemetryIn>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let metrics = state.metrics();

    let Json(input) = payload.map_err(|rej| {
        metrics.ingest_rejections.inc(&[("reason", "payload")]);
        tracing::warn!(error = %rej.body_text(), "telemetry payload rejected");
        TelemetryError::Validation(rej.body_text())
    })?;

    let record = input
        .into_record(state.cfg().ingest.timestamp_format)
        .map_err(|e| {
            metrics.ingest_rejections.inc(&[("reason", "record")]);
            tracing::warn!(error = %e, "telemetry record rejected");
            e
        })?;

    tracing::debug!(source = %record.source, timestamp = %record.timestamp, "telemetry received");
    state.store().append(record).await?;
    metrics.records_ingested.inc();

    Ok(Json(json!({ "status": "data received" })))
}
