//! Document types for corpusflow
//!
//! This module provides the [`Document`] type, the unit of text that
//! flows through a mining pipeline, and the [`DocumentLoader`] trait
//! implemented by every loader.
//!
//! A document is backed either by a file path (content read on demand)
//! or by text already in memory. Loaders assign each document a
//! sequential `doc_id`, unique within one loading call, in enumeration
//! order.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::error::{Error, Result};

/// One unit of text with a pipeline-assigned identifier.
///
/// Documents represent raw content by reference (path) or by value
/// (in-memory text). Path-backed documents are lazy: constructing one
/// performs no I/O, and the file is only read when [`content`](Document::content)
/// is called.
///
/// # Example
///
/// ```
/// use corpusflow::core::documents::Document;
///
/// let doc = Document::from_text(0, "the quick brown fox");
/// assert_eq!(doc.content().unwrap(), "the quick brown fox");
///
/// let lazy = Document::from_path(1, "corpus/a.txt");
/// assert_eq!(lazy.file_name(), Some("a.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Sequential identifier assigned by the loader (0..N-1 per loading call)
    pub doc_id: usize,

    /// Path to the backing file, if loading from the filesystem
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// In-memory text, if the document was constructed from raw content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Document {
    /// Create a path-backed document. The file is not read until
    /// [`content`](Document::content) is called.
    pub fn from_path(doc_id: usize, path: impl AsRef<Path>) -> Self {
        Self {
            doc_id,
            path: Some(path.as_ref().to_path_buf()),
            text: None,
        }
    }

    /// Create a document from text already in memory.
    pub fn from_text(doc_id: usize, text: impl Into<String>) -> Self {
        Self {
            doc_id,
            path: None,
            text: Some(text.into()),
        }
    }

    /// The text content of the document.
    ///
    /// Returns the in-memory text when present, otherwise reads the
    /// backing file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the backing file cannot be read, or
    /// [`Error::InvalidInput`] if the document has neither text nor path.
    pub fn content(&self) -> Result<String> {
        match (&self.text, &self.path) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => std::fs::read_to_string(path).map_err(Into::into),
            (None, None) => Err(Error::InvalidInput(
                "document has no text or path to read from".to_string(),
            )),
        }
    }

    /// Base filename of the backing file, if any.
    ///
    /// Used to pair a document with its ground-truth answer file.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.path {
            Some(path) => write!(f, "Document {} ({})", self.doc_id, path.display()),
            None => write!(f, "Document {} (in-memory)", self.doc_id),
        }
    }
}

/// Trait for loading documents from a source.
///
/// Implementations enumerate their source in a single pass and return
/// the realized list. Loaders with a cheaper lazy surface (an iterator
/// or stream) expose it as an inherent method alongside this trait.
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    /// Load all documents from the source.
    async fn load(&self) -> Result<Vec<Document>>;
}
