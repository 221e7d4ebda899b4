//! Prometheus metrics exposition

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use prometheus::{Encoder, TextEncoder};

use crate::state::AppState;

/// Expose gathered metrics in the Prometheus text format (GET /metrics)
pub async fn metrics(State(state): State<AppState>) -> Response {
    crate::metrics::DB_CONNECTIONS_ACTIVE.set(i64::from(state.db_pool.size()));

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, encoder.format_type().to_string())],
        buffer,
    )
        .into_response()
}
