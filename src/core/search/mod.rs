//! Search module for keyword-ranked retrieval.
//!
//! This module ranks stored documents by how often query keywords
//! occur in their extracted text. Matching is exact,
//! case-insensitive, literal substring counting; there is no index,
//! no stemming, and no score normalization.

mod engine;
mod keywords;

pub use engine::{rank_documents, score_document, SearchService};
pub use keywords::{compile_matchers, count_occurrences, normalize_keywords};
