//! Core abstractions for corpusflow
//!
//! # Module Overview
//!
//! - [`documents`] - the `Document` type and the `DocumentLoader` trait
//! - [`document_loaders`] - directory and document-store loaders
//! - [`stores`] - the batched document-store trait and in-memory fake
//! - [`answers`] - ground-truth answer-set loading
//! - [`persistence`] - JSON save/load of intermediate objects
//! - [`error`] - crate error type

pub mod answers;
pub mod document_loaders;
pub mod documents;
pub mod error;
pub mod persistence;
pub mod stores;

pub use error::{Error, Result};
