//! Ground-truth answer loading.
//!
//! Answer files sit next to the documents they label: `doc.txt` is
//! paired with `doc.lab`, one keyword per line. An optional permitted
//! vocabulary restricts the answers a loader will return.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::core::error::{Error, Result};

/// Reads ground-truth answer sets for documents in a directory.
///
/// # Example
///
/// ```no_run
/// use corpusflow::core::answers::AnswerLoader;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let loader = AnswerLoader::new("./corpus");
/// let answers = loader.answers_for_doc("doc.txt")?;
/// println!("{} labels", answers.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AnswerLoader {
    /// Directory holding the documents and their answer files
    pub data_dir: PathBuf,
    /// Extension of answer files, without the dot (default: "lab")
    pub label_extension: String,
    /// Permitted vocabulary; answers outside it are dropped
    pub filter: Option<HashSet<String>>,
}

impl AnswerLoader {
    /// Create a new `AnswerLoader` for the given directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            label_extension: "lab".to_string(),
            filter: None,
        }
    }

    /// Set the answer file extension (without the dot).
    #[must_use]
    pub fn with_label_extension(mut self, extension: impl Into<String>) -> Self {
        self.label_extension = extension.into();
        self
    }

    /// Restrict answers to a permitted vocabulary.
    #[must_use]
    pub fn with_filter(mut self, vocabulary: HashSet<String>) -> Self {
        self.filter = Some(vocabulary);
        self
    }

    /// Read the answer set for a document from its answer file.
    ///
    /// The answer path is derived by replacing the document extension
    /// with the label extension, so `"doc.txt"` reads `doc.lab`. The
    /// file is split into newline-stripped strings; when a vocabulary
    /// filter is configured, answers outside it are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the answer file does not exist.
    pub fn answers_for_doc(&self, doc_name: &str) -> Result<HashSet<String>> {
        let label_path = self
            .data_dir
            .join(Path::new(doc_name).with_extension(&self.label_extension));

        if !label_path.is_file() {
            return Err(Error::NotFound(format!(
                "answer file {} does not exist",
                label_path.display()
            )));
        }

        let contents = std::fs::read_to_string(&label_path)?;
        let answers = contents.lines().map(str::to_owned).collect();
        Ok(self.apply_filter(answers))
    }

    /// Build an answer set from labels already in memory, bypassing the
    /// filesystem. The vocabulary filter still applies.
    #[must_use]
    pub fn answers_from_labels(&self, labels: &[String]) -> HashSet<String> {
        self.apply_filter(labels.iter().cloned().collect())
    }

    fn apply_filter(&self, answers: HashSet<String>) -> HashSet<String> {
        match &self.filter {
            Some(vocabulary) => answers
                .into_iter()
                .filter(|keyword| vocabulary.contains(keyword))
                .collect(),
            None => answers,
        }
    }
}
