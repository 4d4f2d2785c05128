//! Document store loader.
//!
//! Fetches corpus text from a [`DocumentStore`] by external id, in
//! bounded batches, and enumerates the results into [`Document`]s.

use async_stream::try_stream;
use async_trait::async_trait;
use futures::stream::Stream;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Arc;

use crate::core::documents::{Document, DocumentLoader};
use crate::core::error::Result;
use crate::core::stores::DocumentStore;

/// Maximum number of external ids per store query.
///
/// Bounds the size of the membership filter each fetch sends to the
/// backend; id lists longer than this are sliced into multiple queries.
pub const DEFAULT_FETCH_BATCH_SIZE: usize = 500_000;

/// Loads documents from a [`DocumentStore`] by external id.
///
/// The caller's id list is optionally shuffled, then sliced into chunks
/// of at most the batch size. Each chunk is fetched with one store
/// query, results are concatenated in fetch order, and sequential
/// `doc_id`s are assigned to the text-backed documents built from each
/// record's `full_text`.
///
/// Stores answer membership queries in no particular order, so the
/// fetched documents do not track the caller's id order; only the total
/// count (one document per matching record) is guaranteed.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use corpusflow::core::document_loaders::StoreLoader;
/// use corpusflow::core::documents::DocumentLoader;
/// use corpusflow::core::stores::InMemoryDocumentStore;
///
/// # tokio_test::block_on(async {
/// let mut store = InMemoryDocumentStore::new();
/// store.insert(7, "some corpus text");
///
/// let loader = StoreLoader::new(Arc::new(store), vec![7, 8]);
/// let documents = loader.load().await.unwrap();
/// assert_eq!(documents.len(), 1);
/// # });
/// ```
#[derive(Clone)]
pub struct StoreLoader {
    store: Arc<dyn DocumentStore>,
    ids: Vec<i64>,
    batch_size: usize,
    shuffle: bool,
    seed: Option<u64>,
}

impl StoreLoader {
    /// Create a loader over `store` for the given external ids.
    pub fn new(store: Arc<dyn DocumentStore>, ids: Vec<i64>) -> Self {
        Self {
            store,
            ids,
            batch_size: DEFAULT_FETCH_BATCH_SIZE,
            shuffle: false,
            seed: None,
        }
    }

    /// Override the per-query id limit. A batch size of zero is treated
    /// as one.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Set whether to shuffle the id list before fetching.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Fix the shuffle seed for reproducible orderings.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The id list as queried: shuffled when configured.
    fn prepared_ids(&self) -> Vec<i64> {
        let mut ids = self.ids.clone();
        if self.shuffle {
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            ids.shuffle(&mut rng);
        }
        ids
    }

    /// Lazily stream the documents, fetching one batch per poll cycle.
    ///
    /// Yields the same documents as [`DocumentLoader::load`]; batches
    /// are only fetched as the stream is consumed.
    pub fn stream(&self) -> impl Stream<Item = Result<Document>> + '_ {
        try_stream! {
            let ids = self.prepared_ids();
            let mut doc_id = 0usize;
            for chunk in ids.chunks(self.batch_size) {
                let records = self.store.fetch_by_ids(chunk).await?;
                tracing::debug!(requested = chunk.len(), fetched = records.len(), "fetched batch");
                for record in records {
                    yield Document::from_text(doc_id, record.full_text);
                    doc_id += 1;
                }
            }
        }
    }
}

impl std::fmt::Debug for StoreLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreLoader")
            .field("ids", &self.ids.len())
            .field("batch_size", &self.batch_size)
            .field("shuffle", &self.shuffle)
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl DocumentLoader for StoreLoader {
    async fn load(&self) -> Result<Vec<Document>> {
        let ids = self.prepared_ids();
        let mut documents = Vec::new();
        for chunk in ids.chunks(self.batch_size) {
            let records = self.store.fetch_by_ids(chunk).await?;
            tracing::debug!(requested = chunk.len(), fetched = records.len(), "fetched batch");
            for record in records {
                documents.push(Document::from_text(documents.len(), record.full_text));
            }
        }
        Ok(documents)
    }
}
