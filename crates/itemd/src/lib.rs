//! Top-level facade crate for itemd.
//!
//! Re-exports the core types and the server library so users can depend on a single crate.

pub mod core {
    pub use itemd_core::*;
}

pub mod server {
    pub use itemd_server::*;
}
