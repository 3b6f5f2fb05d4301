//! In-memory document repository.
//!
//! This is the reference storage backend: a vector of documents and
//! an id counter behind one async `RwLock`. Id assignment happens
//! under the write lock, so inserts can never race on identity, and
//! reads clone a snapshot under the read lock, so a search never
//! observes a document mid-insert.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::core::error::{CvScanError, Result};
use crate::core::storage::DocumentStore;
use crate::core::types::{Document, DocumentDraft};

/// First id handed out by a fresh (or freshly cleared) store
const INITIAL_ID: u64 = 1;

#[derive(Debug)]
struct Inner {
    documents: Vec<Document>,
    next_id: u64,
}

/// In-memory [`DocumentStore`] implementation
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store with the id counter at its initial value
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                documents: Vec::new(),
                next_id: INITIAL_ID,
            }),
        }
    }

    /// Number of stored documents
    pub async fn len(&self) -> usize {
        self.inner.read().await.documents.len()
    }

    /// Whether the store holds no documents
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.documents.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, draft: DocumentDraft) -> Result<Document> {
        if draft.extracted_text.trim().is_empty() {
            return Err(CvScanError::InvalidDocument(
                "Extracted text is empty".to_string(),
            ));
        }

        let mut inner = self.inner.write().await;

        let document = Document {
            id: inner.next_id,
            filename: draft.filename,
            content_type: draft.content_type,
            extracted_text: draft.extracted_text,
            uploaded_at: Utc::now(),
        };
        inner.next_id += 1;
        inner.documents.push(document.clone());

        tracing::debug!(
            id = document.id,
            filename = %document.filename,
            "Document stored"
        );

        Ok(document)
    }

    async fn list_all(&self) -> Result<Vec<Document>> {
        Ok(self.inner.read().await.documents.clone())
    }

    async fn clear_all(&self) -> Result<usize> {
        let mut inner = self.inner.write().await;

        let cleared = inner.documents.len();
        inner.documents.clear();
        inner.next_id = INITIAL_ID;

        tracing::info!(cleared, "Repository cleared");

        Ok(cleared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(filename: &str, text: &str) -> DocumentDraft {
        DocumentDraft {
            filename: filename.to_string(),
            content_type: "application/pdf".to_string(),
            extracted_text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids_from_one() {
        let store = MemoryStore::new();

        let a = store.insert(draft("a.pdf", "alpha")).await.unwrap();
        let b = store.insert(draft("b.pdf", "beta")).await.unwrap();
        let c = store.insert(draft("c.pdf", "gamma")).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn test_insert_rejects_blank_text() {
        let store = MemoryStore::new();

        let result = store.insert(draft("empty.pdf", "   \n\t ")).await;

        assert!(matches!(result, Err(CvScanError::InvalidDocument(_))));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_rejected_draft_does_not_consume_an_id() {
        let store = MemoryStore::new();

        store.insert(draft("empty.pdf", "")).await.unwrap_err();
        let doc = store.insert(draft("ok.pdf", "text")).await.unwrap();

        assert_eq!(doc.id, 1);
    }

    #[tokio::test]
    async fn test_list_all_returns_insertion_order() {
        let store = MemoryStore::new();

        store.insert(draft("first.pdf", "one")).await.unwrap();
        store.insert(draft("second.pdf", "two")).await.unwrap();

        let docs = store.list_all().await.unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].filename, "first.pdf");
        assert_eq!(docs[1].filename, "second.pdf");
    }

    #[tokio::test]
    async fn test_clear_all_empties_and_resets_identity() {
        let store = MemoryStore::new();

        store.insert(draft("a.pdf", "alpha")).await.unwrap();
        store.insert(draft("b.pdf", "beta")).await.unwrap();

        let cleared = store.clear_all().await.unwrap();
        assert_eq!(cleared, 2);
        assert!(store.list_all().await.unwrap().is_empty());

        let next = store.insert(draft("c.pdf", "gamma")).await.unwrap();
        assert_eq!(next.id, INITIAL_ID);
    }

    #[tokio::test]
    async fn test_clear_all_on_empty_store() {
        let store = MemoryStore::new();

        assert_eq!(store.clear_all().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_filename_preserved_verbatim() {
        let store = MemoryStore::new();

        let doc = store
            .insert(draft("履歴書-田中.docx", "経験: Rust"))
            .await
            .unwrap();

        assert_eq!(doc.filename, "履歴書-田中.docx");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_never_share_an_id() {
        use std::collections::HashSet;
        use std::sync::Arc;

        let store = Arc::new(MemoryStore::new());

        let mut handles = Vec::new();
        for i in 0..32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .insert(DocumentDraft {
                        filename: format!("cv-{i}.pdf"),
                        content_type: "application/pdf".to_string(),
                        extracted_text: format!("candidate {i}"),
                    })
                    .await
                    .unwrap()
                    .id
            }));
        }

        let mut ids = HashSet::new();
        for handle in handles {
            assert!(ids.insert(handle.await.unwrap()));
        }

        assert_eq!(ids.len(), 32);
        assert_eq!(store.len().await, 32);
    }
}
