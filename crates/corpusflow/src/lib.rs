//! # corpusflow
//!
//! Document and ground-truth label loading for text-mining pipelines.
//!
//! corpusflow pulls raw text documents either from a local directory of
//! files or from a remote document store, pairs them with optional
//! answer files, and persists intermediate pipeline objects to disk.
//! Every operation is a single pass over its input; failures are
//! explicit errors with no internal retry.
//!
//! # Loading a local corpus
//!
//! ```no_run
//! use corpusflow::{DirectoryLoader, DocumentLoader};
//!
//! # tokio_test::block_on(async {
//! let loader = DirectoryLoader::new("./corpus");
//! let documents = loader.load().await.unwrap();
//! for doc in &documents {
//!     println!("{}: {}", doc.doc_id, doc.content().unwrap().len());
//! }
//! # });
//! ```
//!
//! # Loading from a document store
//!
//! Remote corpora sit behind the narrow
//! [`DocumentStore`](crate::core::stores::DocumentStore) trait; the
//! `corpusflow-mongodb` crate provides the MongoDB backend, and
//! [`InMemoryDocumentStore`](crate::core::stores::InMemoryDocumentStore)
//! serves tests and small corpora.
//!
//! © 2025 Dropbox

pub mod core;

pub use crate::core::answers::AnswerLoader;
pub use crate::core::document_loaders::{DirectoryLoader, StoreLoader};
pub use crate::core::documents::{Document, DocumentLoader};
pub use crate::core::error::{Error, Result};
pub use crate::core::persistence::{load_from_disk, save_to_disk};
pub use crate::core::stores::{DocumentRecord, DocumentStore, InMemoryDocumentStore};
