//! Local directory loader.
//!
//! Enumerates raw text documents from a flat directory of files,
//! assigning sequential ids in sorted (or explicitly shuffled) order.
//!
//! © 2025 Dropbox

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::core::documents::{Document, DocumentLoader};
use crate::core::error::{Error, Result};

/// Loads documents from text files directly inside a directory.
///
/// The `DirectoryLoader` lists the unique base filenames of files with
/// the document extension (default `txt`), sorts them lexicographically,
/// optionally shuffles them, and assigns each a sequential `doc_id` in
/// the resulting order. Each document is path-backed; no file content is
/// read during enumeration.
///
/// Subdirectories are not descended into.
///
/// # Example
///
/// ```no_run
/// use corpusflow::core::document_loaders::DirectoryLoader;
/// use corpusflow::core::documents::DocumentLoader;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let loader = DirectoryLoader::new("./corpus");
/// let documents = loader.load().await?;
/// println!("Loaded {} documents", documents.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    /// Path to the directory with document files
    pub data_dir: PathBuf,
    /// Extension of document files, without the dot (default: "txt")
    pub extension: String,
    /// Whether to shuffle the sorted filenames before assigning ids
    pub shuffle: bool,
    /// Seed for the shuffle; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl DirectoryLoader {
    /// Create a new `DirectoryLoader` for the given directory path.
    ///
    /// # Example
    ///
    /// ```
    /// use corpusflow::core::document_loaders::DirectoryLoader;
    ///
    /// let loader = DirectoryLoader::new("./corpus");
    /// ```
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            extension: "txt".to_string(),
            shuffle: false,
            seed: None,
        }
    }

    /// Set the document file extension (without the dot).
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set whether to shuffle the sorted filenames before assigning ids.
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

    /// Unique base filenames (stems) of matching files, sorted and
    /// optionally shuffled.
    fn file_stems(&self) -> Result<Vec<String>> {
        if !self.data_dir.is_dir() {
            return Err(Error::NotFound(format!(
                "data directory {} does not exist",
                self.data_dir.display()
            )));
        }

        let mut stems: Vec<String> = walkdir::WalkDir::new(&self.data_dir)
            .max_depth(1)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let path = entry.path();
                if path.extension().and_then(OsStr::to_str) == Some(self.extension.as_str()) {
                    path.file_stem().and_then(OsStr::to_str).map(str::to_owned)
                } else {
                    None
                }
            })
            .collect();

        stems.sort();
        stems.dedup();

        if self.shuffle {
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            stems.shuffle(&mut rng);
        }

        Ok(stems)
    }

    /// Lazily enumerate the documents.
    ///
    /// The directory listing happens up front; each `Document` is then
    /// constructed on demand and performs no I/O until its content is
    /// requested.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the data directory does not exist.
    pub fn iter(&self) -> Result<impl Iterator<Item = Document>> {
        let stems = self.file_stems()?;
        let data_dir = self.data_dir.clone();
        let extension = self.extension.clone();
        Ok(stems.into_iter().enumerate().map(move |(doc_id, stem)| {
            Document::from_path(doc_id, data_dir.join(format!("{stem}.{extension}")))
        }))
    }
}

#[async_trait]
impl DocumentLoader for DirectoryLoader {
    async fn load(&self) -> Result<Vec<Document>> {
        let documents: Vec<Document> = self.iter()?.collect();
        tracing::debug!(
            dir = %self.data_dir.display(),
            count = documents.len(),
            "enumerated documents"
        );
        Ok(documents)
    }
}

#[cfg(test)]
// SAFETY: Tests use unwrap() to panic on unexpected errors, clearly indicating test failure.
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn corpus_dir(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        for (name, contents) in files {
            std::fs::write(temp_dir.path().join(name), contents).unwrap();
        }
        temp_dir
    }

    #[test]
    fn test_directory_loader_defaults() {
        let loader = DirectoryLoader::new("./corpus");
        assert_eq!(loader.data_dir, PathBuf::from("./corpus"));
        assert_eq!(loader.extension, "txt");
        assert!(!loader.shuffle);
        assert!(loader.seed.is_none());
    }

    #[tokio::test]
    async fn test_load_sorted_order_with_sequential_ids() {
        let temp_dir = corpus_dir(&[("b.txt", "bee"), ("a.txt", "ay"), ("a.lab", "label")]);

        let loader = DirectoryLoader::new(temp_dir.path());
        let docs = loader.load().await.unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].doc_id, 0);
        assert_eq!(docs[0].file_name(), Some("a.txt"));
        assert_eq!(docs[1].doc_id, 1);
        assert_eq!(docs[1].file_name(), Some("b.txt"));
    }

    #[tokio::test]
    async fn test_documents_are_path_backed() {
        let temp_dir = corpus_dir(&[("a.txt", "contents of a")]);

        let loader = DirectoryLoader::new(temp_dir.path());
        let docs = loader.load().await.unwrap();

        assert!(docs[0].text.is_none());
        assert_eq!(docs[0].content().unwrap(), "contents of a");
    }

    #[tokio::test]
    async fn test_ignores_other_extensions_and_subdirectories() {
        let temp_dir = corpus_dir(&[("a.txt", ""), ("notes.md", ""), ("b.lab", "")]);
        std::fs::create_dir(temp_dir.path().join("nested.txt")).unwrap();

        let loader = DirectoryLoader::new(temp_dir.path());
        let docs = loader.load().await.unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].file_name(), Some("a.txt"));
    }

    #[tokio::test]
    async fn test_custom_extension() {
        let temp_dir = corpus_dir(&[("a.text", ""), ("b.txt", "")]);

        let loader = DirectoryLoader::new(temp_dir.path()).with_extension("text");
        let docs = loader.load().await.unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].file_name(), Some("a.text"));
    }

    #[tokio::test]
    async fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let loader = DirectoryLoader::new(temp_dir.path());
        let docs = loader.load().await.unwrap();

        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn test_missing_directory_errors() {
        let loader = DirectoryLoader::new("/nonexistent/path/to/corpus");
        let result = loader.load().await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_seeded_shuffle_is_deterministic() {
        let temp_dir = corpus_dir(&[
            ("a.txt", ""),
            ("b.txt", ""),
            ("c.txt", ""),
            ("d.txt", ""),
            ("e.txt", ""),
        ]);

        let loader = DirectoryLoader::new(temp_dir.path())
            .with_shuffle(true)
            .with_seed(7);
        let first = loader.load().await.unwrap();
        let second = loader.load().await.unwrap();

        let names = |docs: &[Document]| -> Vec<String> {
            docs.iter()
                .map(|d| d.file_name().unwrap().to_string())
                .collect()
        };
        assert_eq!(names(&first), names(&second));

        // Ids stay sequential regardless of order
        let ids: Vec<usize> = first.iter().map(|d| d.doc_id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);

        // Shuffling permutes the same set of files
        let mut sorted = names(&first);
        sorted.sort();
        assert_eq!(
            sorted,
            vec!["a.txt", "b.txt", "c.txt", "d.txt", "e.txt"]
        );
    }

    #[tokio::test]
    async fn test_iter_matches_load() {
        let temp_dir = corpus_dir(&[("x.txt", ""), ("y.txt", "")]);

        let loader = DirectoryLoader::new(temp_dir.path());
        let lazy: Vec<Document> = loader.iter().unwrap().collect();
        let realized = loader.load().await.unwrap();

        assert_eq!(lazy, realized);
    }
}
