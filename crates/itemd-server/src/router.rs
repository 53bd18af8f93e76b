//! Axum router wiring.
//!
//! The interceptor is the outermost layer, so unknown paths, wrong methods and
//! body rejections are all counted exactly once.

use axum::{extract::DefaultBodyLimit, middleware, routing::get, Router};

use crate::{api::items, app_state::AppState, interceptor, ops};

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.cfg().server.max_body_bytes;

    Router::new()
        .route("/health", get(ops::health))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .route("/metrics/prometheus", get(ops::prometheus))
        .route("/items", get(items::list_items).post(items::create_item))
        .route("/items/:id", get(items::get_item))
        .fallback(items::fallback)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            interceptor::count_requests,
        ))
        .with_state(state)
}
