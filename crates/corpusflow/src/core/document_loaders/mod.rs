//! Document loaders.
//!
//! Loaders turn a document source into a sequence of [`Document`]s with
//! sequential ids:
//!
//! - [`DirectoryLoader`] - text files directly inside a local directory
//! - [`StoreLoader`] - batched fetch from a
//!   [`DocumentStore`](crate::core::stores::DocumentStore) by external id
//!
//! [`Document`]: crate::core::documents::Document

pub mod directory;
pub mod store;

pub use directory::DirectoryLoader;
pub use store::{StoreLoader, DEFAULT_FETCH_BATCH_SIZE};
