//! itemd core: the item model, the in-memory store, and the shared error surface.
//!
//! This crate carries no transport or runtime dependencies. The HTTP service
//! in `itemd-server` owns one `ItemStore` and one `RequestCounter` and hands
//! them to its handlers; tests build fresh instances of both.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. A poisoned lock is
//! recovered rather than propagated, since no store operation can leave the
//! map half-written.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod counter;
pub mod error;
pub mod id;
pub mod item;
pub mod store;

/// Shared result type.
pub use error::{ItemdError, Result};

pub use counter::RequestCounter;
pub use id::IdAllocator;
pub use item::{Item, NewItem};
pub use store::ItemStore;
