//! Shared application state for the item service.
//!
//! Built once in `main` (or per test) and injected into the router; the
//! store and the request counter are independent and never locked together.

use std::sync::Arc;

use itemd_core::{ItemStore, RequestCounter};

use crate::config::ItemdConfig;
use crate::obs::HttpMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ItemdConfig,
    store: ItemStore,
    requests: RequestCounter,
    metrics: HttpMetrics,
}

impl AppState {
    pub fn new(cfg: ItemdConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                store: ItemStore::new(),
                requests: RequestCounter::new(),
                metrics: HttpMetrics::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &ItemdConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &ItemStore {
        &self.inner.store
    }

    pub fn requests(&self) -> &RequestCounter {
        &self.inner.requests
    }

    pub fn metrics(&self) -> &HttpMetrics {
        &self.inner.metrics
    }

    pub fn set_draining(&self) {
        self.inner.metrics.set_draining();
    }

    pub fn is_draining(&self) -> bool {
        self.inner.metrics.is_draining()
    }

    /// Process totals rendered alongside the HTTP metrics.
    pub fn metrics_extra(&self) -> Vec<(&'static str, &'static str, u64)> {
        vec![
            ("itemd_requests_total", "counter", self.requests().read()),
            ("itemd_items", "gauge", self.store().count() as u64),
        ]
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ItemdConfig::default())
    }
}
