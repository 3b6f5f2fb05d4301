//! Unified service container for cvscan
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::search::SearchService;
use crate::core::storage::{DocumentStore, MemoryStore};
use std::sync::Arc;

/// Unified services container
///
/// Built once at startup and shared into every handler. Owning the
/// store here (rather than a module-level singleton) keeps its
/// lifetime explicit and lets tests build isolated instances.
#[derive(Clone)]
pub struct Services {
    /// Document repository
    pub store: Arc<dyn DocumentStore>,

    /// Keyword-ranked search service
    pub search: Arc<SearchService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration, backed by the in-memory store
    pub fn new(config: Config) -> Self {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());

        let search = Arc::new(SearchService::new(
            Arc::clone(&store),
            config.search.max_keywords,
            config.search.max_keyword_length,
        ));

        Self {
            store,
            search,
            config: Arc::new(config),
        }
    }
}
