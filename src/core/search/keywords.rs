//! Keyword normalization and literal matcher compilation.
//!
//! Every keyword is escaped before it reaches the regex engine, so
//! a keyword like `C++` or `a.b` matches itself literally instead
//! of being interpreted as a pattern. Matching is case-insensitive
//! with Unicode case folding.

use regex::{Regex, RegexBuilder};

use crate::core::error::{CvScanError, Result};

/// Trim keywords and drop the ones that are blank
///
/// Duplicates are kept; a repeated keyword is semantically
/// redundant but harmless, it just counts the same matches twice.
pub fn normalize_keywords(keywords: &[String]) -> Vec<&str> {
    keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Compile keywords into case-insensitive literal matchers
///
/// Keywords must already be normalized. A matcher that fails to
/// build surfaces as an invalid-query error for this request
/// rather than a fault deeper in the scan.
pub fn compile_matchers(keywords: &[&str]) -> Result<Vec<Regex>> {
    keywords
        .iter()
        .map(|keyword| {
            RegexBuilder::new(&regex::escape(keyword))
                .case_insensitive(true)
                .build()
                .map_err(|e| {
                    CvScanError::InvalidQuery(format!("Unusable keyword '{keyword}': {e}"))
                })
        })
        .collect()
}

/// Count non-overlapping occurrences of one keyword in a text
pub fn count_occurrences(matcher: &Regex, text: &str) -> usize {
    matcher.find_iter(text).count()
}
