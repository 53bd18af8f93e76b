//! Lightweight in-process metrics.
//!
//! Per-route request counts and latencies recorded by the request interceptor
//! and rendered in Prometheus text format by `/metrics/prometheus`.

pub mod metrics;

pub use metrics::HttpMetrics;
