//! Item endpoints and the HTTP error surface.
//!
//! - `GET  /items`      : every item, oldest first
//! - `GET  /items/:id`  : one item or 404
//! - `POST /items`      : create, 201 with the stored item

pub mod error;
pub mod items;

pub use error::ApiError;
