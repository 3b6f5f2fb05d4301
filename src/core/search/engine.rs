//! Ranking engine over the repository snapshot.
//!
//! The engine is a stateless function of (snapshot, keywords): it
//! reads the documents once, scores each against every keyword, and
//! returns the matches best-first. It never mutates the store and
//! retains nothing between calls.

use regex::Regex;
use std::sync::Arc;
use std::time::Instant;

use crate::core::error::{CvScanError, Result};
use crate::core::search::keywords::{compile_matchers, count_occurrences, normalize_keywords};
use crate::core::storage::DocumentStore;
use crate::core::types::{Document, SearchRequest, SearchResponse};

/// Keyword-ranked search service
pub struct SearchService {
    store: Arc<dyn DocumentStore>,
    max_keywords: usize,
    max_keyword_length: usize,
}

impl SearchService {
    /// Create a new search service
    pub fn new(store: Arc<dyn DocumentStore>, max_keywords: usize, max_keyword_length: usize) -> Self {
        Self {
            store,
            max_keywords,
            max_keyword_length,
        }
    }

    /// Execute a ranked search over the current repository snapshot
    ///
    /// This is the ranked entry point only: a request whose keyword
    /// set is empty (or blank after trimming) is an invalid query.
    /// Callers that want the full unranked collection use
    /// [`DocumentStore::list_all`] instead; the engine never
    /// silently degrades to a listing.
    pub async fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
        let start = Instant::now();

        let keywords = normalize_keywords(&request.keywords);

        if keywords.is_empty() {
            return Err(CvScanError::InvalidQuery(
                "At least one keyword is required".to_string(),
            ));
        }

        if keywords.len() > self.max_keywords {
            return Err(CvScanError::InvalidQuery(format!(
                "Too many keywords: {} (limit {})",
                keywords.len(),
                self.max_keywords
            )));
        }

        if let Some(long) = keywords
            .iter()
            .find(|k| k.chars().count() > self.max_keyword_length)
        {
            return Err(CvScanError::InvalidQuery(format!(
                "Keyword '{long}' exceeds {} characters",
                self.max_keyword_length
            )));
        }

        let matchers = compile_matchers(&keywords)?;

        // Single consistent snapshot; the scan never touches the
        // live collection.
        let snapshot = self.store.list_all().await?;
        let results = rank_documents(snapshot, &matchers);

        let duration_ms = start.elapsed().as_millis() as u64;
        let count = results.len();

        tracing::debug!(
            keywords = keywords.len(),
            count,
            duration_ms,
            "Search completed"
        );

        Ok(SearchResponse {
            keywords: request.keywords,
            results,
            count,
            duration_ms,
        })
    }
}

/// Sum of per-keyword occurrence counts for one document
///
/// Equal weighting across keywords; no boosting, no normalization
/// by document length.
pub fn score_document(document: &Document, matchers: &[Regex]) -> usize {
    matchers
        .iter()
        .map(|m| count_occurrences(m, &document.extracted_text))
        .sum()
}

/// Rank a snapshot against compiled matchers
///
/// Documents with a zero score are dropped. The rest sort by score
/// descending, ties broken by ascending id so equal-score results
/// come back in a reproducible order.
pub fn rank_documents(documents: Vec<Document>, matchers: &[Regex]) -> Vec<Document> {
    let mut scored: Vec<(usize, Document)> = documents
        .into_iter()
        .map(|doc| (score_document(&doc, matchers), doc))
        .filter(|(score, _)| *score > 0)
        .collect();

    scored.sort_by(|(score_a, doc_a), (score_b, doc_b)| {
        score_b.cmp(score_a).then(doc_a.id.cmp(&doc_b.id))
    });

    scored.into_iter().map(|(_, doc)| doc).collect()
}
