//! itemd server library entry.
//!
//! Wires config, shared state, the request interceptor and the HTTP handlers
//! into an axum router. Consumed by the binary (`main.rs`) and by
//! integration tests, which drive the router directly.

pub mod api;
pub mod app_state;
pub mod config;
pub mod interceptor;
pub mod obs;
pub mod ops;
pub mod router;
