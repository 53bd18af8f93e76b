//! Request-counting interceptor.
//!
//! Wraps every route and the fallback. The request counter is bumped before
//! the inner service runs, so `/metrics` counts itself; status and latency
//! are recorded after it returns, whatever the outcome.

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use tokio::time::Instant;

use crate::app_state::AppState;

pub async fn count_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let total = state.requests().increment();

    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    let started = Instant::now();
    let resp = next.run(req).await;
    let elapsed = started.elapsed();

    let status = resp.status().as_u16();
    state.metrics().record(method.as_str(), &route, status, elapsed);
    tracing::debug!(
        %method,
        route = %route,
        status,
        elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
        total,
        "request served"
    );

    resp
}
