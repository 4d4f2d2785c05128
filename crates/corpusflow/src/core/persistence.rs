//! Disk persistence for intermediate pipeline objects.
//!
//! Serializes any serde value to a JSON file and back. There is no
//! versioning or integrity check on the stored bytes; the caller owns
//! the meaning of what it saved.
//!
//! © 2025 Dropbox

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

use crate::core::error::{Error, Result};

/// Serialize `obj` as JSON at `path`.
///
/// # Errors
///
/// - [`Error::NotFound`] if the parent directory does not exist
/// - [`Error::AlreadyExists`] if a file exists at `path` and `overwrite`
///   is false
/// - [`Error::Serialization`] / [`Error::Io`] on encoding or write failure
///
/// # Example
///
/// ```no_run
/// use corpusflow::core::persistence::save_to_disk;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// save_to_disk("model/vocab.json", &vec!["cat", "apple"], false)?;
/// # Ok(())
/// # }
/// ```
pub fn save_to_disk<T: Serialize>(path: impl AsRef<Path>, obj: &T, overwrite: bool) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        // An empty parent means a bare filename in the working directory
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(Error::NotFound(format!(
                "directory {} does not exist",
                parent.display()
            )));
        }
    }

    if !overwrite && path.exists() {
        return Err(Error::AlreadyExists(format!(
            "file {} already exists",
            path.display()
        )));
    }

    let bytes = serde_json::to_vec(obj)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Deserialize a JSON value previously written with [`save_to_disk`].
///
/// # Errors
///
/// - [`Error::NotFound`] if no file exists at `path`
/// - [`Error::Serialization`] / [`Error::Io`] on read or decoding failure
pub fn load_from_disk<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::NotFound(format!(
            "file {} does not exist",
            path.display()
        )));
    }

    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}
