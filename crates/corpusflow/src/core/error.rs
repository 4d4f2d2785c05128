//! Error types for corpusflow operations.
//!
//! Every failure mode is explicit and fatal to the operation that hit it:
//! loaders and persistence helpers either fully succeed or return an error
//! before producing any output. There is no internal retry or recovery.

use thiserror::Error;

/// Result type alias for corpusflow operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by corpusflow operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// A required file or directory does not exist.
    ///
    /// Raised for missing data directories, missing answer files, missing
    /// serialized objects, and missing parent directories on save.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Refused to overwrite an existing file.
    ///
    /// Returned by [`save_to_disk`](crate::core::persistence::save_to_disk)
    /// when the target exists and `overwrite` is false.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Input validation error.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Document store backend failure.
    ///
    /// Backend crates wrap their driver errors in this variant via
    /// [`Error::store`].
    #[error("Document store error: {0}")]
    Store(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wrap a document-store backend error.
    ///
    /// # Example
    ///
    /// ```
    /// use corpusflow::core::error::Error;
    ///
    /// let err = Error::store("connection reset");
    /// assert!(matches!(err, Error::Store(_)));
    /// ```
    pub fn store(msg: impl Into<String>) -> Self {
        Error::Store(msg.into())
    }

    /// True when the error reports a missing file or directory.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}
