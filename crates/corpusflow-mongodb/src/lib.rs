//! # MongoDB document store
//!
//! MongoDB-backed implementation of the corpusflow
//! [`DocumentStore`] trait. One collection holds one corpus: each
//! document is a record with an integer `_id` and the raw text in a
//! `full_text` field.
//!
//! Each fetch issues a single `find` with an `$in` membership filter;
//! callers bound the id-list size (the `StoreLoader` batches at 500 000
//! ids per query). MongoDB answers `$in` queries in no particular
//! order, so results do not track the caller's id order.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use corpusflow::{DocumentLoader, StoreLoader};
//! use corpusflow_mongodb::MongoDocumentStore;
//!
//! # tokio_test::block_on(async {
//! let store = MongoDocumentStore::connect("mongodb://localhost:27017", "mining", "abstracts")
//!     .await
//!     .unwrap();
//!
//! let loader = StoreLoader::new(Arc::new(store), vec![101, 102, 103]);
//! let documents = loader.load().await.unwrap();
//! println!("Fetched {} documents", documents.len());
//! # });
//! ```

use async_trait::async_trait;
use corpusflow::core::error::{Error, Result};
use corpusflow::core::stores::{DocumentRecord, DocumentStore};
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};

/// Wire format of one corpus record in MongoDB.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MongoRecord {
    #[serde(rename = "_id")]
    id: i64,
    full_text: String,
}

/// Document store backed by a MongoDB collection.
///
/// # Example
///
/// ```rust,no_run
/// use corpusflow_mongodb::MongoDocumentStore;
///
/// # tokio_test::block_on(async {
/// let store = MongoDocumentStore::connect("mongodb://localhost:27017", "mining", "abstracts")
///     .await
///     .unwrap();
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MongoDocumentStore {
    collection: Collection<MongoRecord>,
}

impl MongoDocumentStore {
    /// Create a store over a collection of the given database.
    #[must_use]
    pub fn new(database: &Database, collection: &str) -> Self {
        Self {
            collection: database.collection::<MongoRecord>(collection),
        }
    }

    /// Connect to a MongoDB deployment and select the corpus collection.
    ///
    /// The client connects lazily; a bad address surfaces on the first
    /// fetch rather than here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`] if the connection string cannot be parsed.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| Error::store(format!("failed to create MongoDB client: {e}")))?;
        Ok(Self::new(&client.database(database), collection))
    }
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    async fn fetch_by_ids(&self, ids: &[i64]) -> Result<Vec<DocumentRecord>> {
        let filter = doc! { "_id": { "$in": ids.to_vec() } };

        let cursor = self
            .collection
            .find(filter)
            .await
            .map_err(|e| Error::store(format!("find failed: {e}")))?;

        let records: Vec<MongoRecord> = cursor
            .try_collect()
            .await
            .map_err(|e| Error::store(format!("cursor failed: {e}")))?;

        tracing::debug!(requested = ids.len(), fetched = records.len(), "fetched from MongoDB");

        Ok(records
            .into_iter()
            .map(|record| DocumentRecord::new(record.id, record.full_text))
            .collect())
    }
}
