//! HTTP REST adapter
//!
//! Depends only on core/. Provides the upload, search, list, and
//! clear endpoints via the Axum web framework, plus the mapping
//! from domain errors to HTTP status codes.

pub mod error;
pub mod handlers;
pub mod middleware;

pub use handlers::*;
