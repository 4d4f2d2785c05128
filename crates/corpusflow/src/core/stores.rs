//! Document store abstractions.
//!
//! A document store holds the raw text of a corpus keyed by an external
//! integer id. The interface is deliberately narrow — one batched
//! fetch-by-id-list operation — so storage backends are swappable and
//! loaders can be tested against an in-memory fake.
//!
//! # Implementations
//!
//! - [`InMemoryDocumentStore`] - HashMap-backed store for tests and small corpora
//! - `MongoDocumentStore` (in the `corpusflow-mongodb` crate) - MongoDB collection
//!
//! # Ordering
//!
//! `fetch_by_ids` does NOT guarantee that records come back in the order
//! the ids were given; real backends answer set-membership queries with
//! no order of their own. Consumers must not rely on id-to-position
//! correspondence in the result.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::error::Result;

/// One record fetched from a document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// External id of the record in the backing store
    pub id: i64,
    /// Raw text of the document
    pub full_text: String,
}

impl DocumentRecord {
    /// Create a record from an external id and its text.
    pub fn new(id: i64, full_text: impl Into<String>) -> Self {
        Self {
            id,
            full_text: full_text.into(),
        }
    }
}

/// Batched fetch-by-id-list interface over a corpus store.
///
/// # Contract
///
/// An implementation returns every record whose external id appears in
/// `ids`. Ids with no matching record are silently absent from the
/// result, duplicate ids contribute a single record, and the order of
/// returned records is unspecified.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch all records whose external id is in `ids`.
    async fn fetch_by_ids(&self, ids: &[i64]) -> Result<Vec<DocumentRecord>>;
}

/// In-memory document store backed by a `HashMap`.
///
/// Intended for tests and small corpora. Matches are returned sorted by
/// external id — deterministic, but intentionally not the caller's id
/// order, so nothing downstream can quietly depend on it.
///
/// # Example
///
/// ```
/// use corpusflow::core::stores::{DocumentStore, InMemoryDocumentStore};
///
/// # tokio_test::block_on(async {
/// let mut store = InMemoryDocumentStore::new();
/// store.insert(11, "first text");
/// store.insert(7, "second text");
///
/// let records = store.fetch_by_ids(&[11, 7, 99]).await.unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].id, 7);
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    records: HashMap<i64, String>,
}

impl InMemoryDocumentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the text for an external id.
    pub fn insert(&mut self, id: i64, full_text: impl Into<String>) {
        self.records.insert(id, full_text.into());
    }

    /// Number of records in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<(i64, String)> for InMemoryDocumentStore {
    fn from_iter<I: IntoIterator<Item = (i64, String)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn fetch_by_ids(&self, ids: &[i64]) -> Result<Vec<DocumentRecord>> {
        let mut matches: Vec<DocumentRecord> = ids
            .iter()
            .filter_map(|id| {
                self.records
                    .get(id)
                    .map(|text| DocumentRecord::new(*id, text.clone()))
            })
            .collect();
        matches.sort_by_key(|record| record.id);
        matches.dedup_by_key(|record| record.id);
        Ok(matches)
    }
}

#[cfg(test)]
// SAFETY: Tests use unwrap() to panic on unexpected errors, clearly indicating test failure.
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_returns_matches_sorted_by_id() {
        let store: InMemoryDocumentStore =
            vec![(5, "e".to_string()), (1, "a".to_string()), (9, "i".to_string())]
                .into_iter()
                .collect();

        let records = store.fetch_by_ids(&[9, 5, 1]).await.unwrap();
        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 5, 9]);
    }

    #[tokio::test]
    async fn test_fetch_skips_absent_ids() {
        let mut store = InMemoryDocumentStore::new();
        store.insert(1, "a");

        let records = store.fetch_by_ids(&[1, 2, 3]).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], DocumentRecord::new(1, "a"));
    }

    #[tokio::test]
    async fn test_fetch_dedups_duplicate_ids() {
        let mut store = InMemoryDocumentStore::new();
        store.insert(4, "text");

        let records = store.fetch_by_ids(&[4, 4, 4]).await.unwrap();
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_empty_id_list() {
        let mut store = InMemoryDocumentStore::new();
        store.insert(1, "a");

        let records = store.fetch_by_ids(&[]).await.unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut store = InMemoryDocumentStore::new();
        assert!(store.is_empty());
        store.insert(1, "a");
        store.insert(1, "replaced");
        assert_eq!(store.len(), 1);
    }
}
