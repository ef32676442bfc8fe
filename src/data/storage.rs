use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use super::default_questions;
use crate::models::QuestionStore;

pub const DEFAULT_QUESTIONS_PATH: &str = "questions.json";

/// Failures reading or writing the backing file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to encode questions: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// The JSON file the question store is persisted to.
///
/// Each call opens, reads or rewrites, and closes the file; nothing is held
/// open between calls.
#[derive(Debug, Clone)]
pub struct QuestionFile {
    path: PathBuf,
}

impl QuestionFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted store, or the built-in defaults if there is no file.
    ///
    /// An existing file replaces the defaults entirely. Malformed content is
    /// an error; there is no recovery.
    pub fn load(&self) -> Result<QuestionStore, StorageError> {
        let json_content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no question file, using defaults");
                return Ok(default_questions());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let store: QuestionStore =
            serde_json::from_str(&json_content).map_err(|source| StorageError::Parse {
                path: self.path.clone(),
                source,
            })?;

        info!(path = %self.path.display(), count = store.len(), "loaded questions");
        Ok(store)
    }

    /// Overwrite the file with the full store.
    pub fn save(&self, store: &QuestionStore) -> Result<(), StorageError> {
        let json_content = serde_json::to_string_pretty(store).map_err(StorageError::Encode)?;

        fs::write(&self.path, json_content).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), count = store.len(), "saved questions");
        Ok(())
    }
}

impl Default for QuestionFile {
    fn default() -> Self {
        Self::new(DEFAULT_QUESTIONS_PATH)
    }
}
