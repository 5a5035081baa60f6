use crate::error::ServerResult;
use crate::state::{ServerMetadata, ServerState};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use std::time::SystemTime;

/// Global server start time for uptime calculation
static SERVER_START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

fn uptime_seconds() -> u64 {
    SERVER_START_TIME
        .elapsed()
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Health check endpoint (liveness)
/// Returns 200 if server is running
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "dynform-server",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime_seconds(),
    }))
}

/// Readiness check endpoint
/// Returns 200 when the submission document can be read, 503 otherwise
pub async fn readiness_check(State(state): State<Arc<ServerState>>) -> Response {
    let (status, store_status, records) = match state.store.load().await {
        Ok(document) => (StatusCode::OK, "ready".to_string(), Some(document.len())),
        Err(err) => {
            tracing::warn!(error = %err, "submission store not readable");
            (StatusCode::SERVICE_UNAVAILABLE, err.to_string(), None)
        }
    };

    let body = Json(json!({
        "status": if status.is_success() { "ready" } else { "degraded" },
        "service": "dynform-server",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime_seconds(),
        "components": {
            "api": "ready",
            "store": store_status,
        },
        "records": records,
    }));

    (status, body).into_response()
}

/// Prometheus metrics endpoint
pub async fn metrics(State(state): State<Arc<ServerState>>) -> Response {
    match &state.metrics {
        Some(handle) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => Json(json!({
            "uptime_seconds": uptime_seconds(),
        }))
        .into_response(),
    }
}

/// Server metadata endpoint
pub async fn server_metadata(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<impl IntoResponse> {
    let metadata = ServerMetadata {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime_seconds(),
        data_path: state.store.path().display().to_string(),
    };

    Ok(Json(metadata))
}
