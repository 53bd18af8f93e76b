//! Operational HTTP endpoints.
//!
//! - `/health`             : liveness, `{"status":"ok"}`
//! - `/readyz`             : readiness (503 when draining)
//! - `/metrics`            : request and item totals as JSON
//! - `/metrics/prometheus` : Prometheus text format

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub total_requests: u64,
    pub items_count: usize,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    if state.is_draining() {
        (StatusCode::SERVICE_UNAVAILABLE, "draining")
    } else {
        (StatusCode::OK, "ready")
    }
}

pub async fn metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    // Two independent reads; neither lock is held while taking the other.
    let items_count = state.store().count();
    let total_requests = state.requests().read();
    Json(MetricsResponse { total_requests, items_count })
}

pub async fn prometheus(State(state): State<AppState>) -> Response {
    let extra = state.metrics_extra();
    let body = state.metrics().render(&extra);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}
