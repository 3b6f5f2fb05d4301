//! Storage layer for the document repository.
//!
//! The repository is the sole writer of document identity and
//! timestamps. It is defined as a capability trait so the in-memory
//! implementation can be swapped for a durable backend without
//! touching the search engine, which only ever consumes a snapshot
//! returned by [`DocumentStore::list_all`].

use async_trait::async_trait;

use crate::core::error::Result;
use crate::core::types::{Document, DocumentDraft};

mod memory;

pub use memory::MemoryStore;

/// Capability interface of the document repository
///
/// Implementations must assign unique, strictly increasing ids
/// (no two documents ever share an id, concurrent inserts
/// included) and must treat stored documents as immutable: there
/// is no update and no per-document delete, only insert and bulk
/// clear.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Store a draft, assigning the next id and the current time
    ///
    /// Fails with [`CvScanError::InvalidDocument`] when the draft's
    /// extracted text is blank after trimming; a document with no
    /// text can never match a keyword and must not be stored.
    ///
    /// [`CvScanError::InvalidDocument`]: crate::core::error::CvScanError::InvalidDocument
    async fn insert(&self, draft: DocumentDraft) -> Result<Document>;

    /// Return every stored document
    ///
    /// The in-memory implementation yields insertion order, but
    /// callers must not rely on any particular order here; ranked
    /// ordering is the search engine's job.
    async fn list_all(&self) -> Result<Vec<Document>>;

    /// Remove every document and reset the id counter
    ///
    /// After a clear the next insert is assigned the initial id
    /// again. Returns how many documents were removed. Destructive
    /// and irreversible; any confirmation step belongs to the
    /// caller.
    async fn clear_all(&self) -> Result<usize>;
}
