//! cvscan - Keyword-Ranked Resume Search Service
//!
//! A small REST service that ingests resume documents (PDF/DOCX),
//! extracts their text, and retrieves them ranked by how often a
//! set of query keywords occurs in the extracted text.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types
//!   - storage (document repository, identity/lifecycle)
//!   - search (literal keyword matching, ranking)
//!   - extract (PDF/DOCX text extraction)
//!   - services (unified service container)
//!
//! - **http**: REST API adapter (depends on core)
//!   - handlers, middleware, error mapping
//!
//! # Key Features
//!
//! - Case-insensitive literal keyword ranking (no index, no stemming)
//! - Monotonic document identity assigned by the repository
//! - In-memory storage behind a capability trait
//! - Multipart upload with PDF and DOCX extraction
//! - REST API (5 endpoints)

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{CvScanError, Result};
pub use core::services::Services;
pub use core::storage::{DocumentStore, MemoryStore};
pub use core::types::*;
