//! Error types for vocab-core.

use thiserror::Error;

use crate::storage::StorageError;

/// Result type alias using VocabError.
pub type Result<T> = std::result::Result<T, VocabError>;

/// Errors returned by collection and repository operations.
#[derive(Debug, Error)]
pub enum VocabError {
    #[error("word not found: {0}")]
    WordNotFound(String),

    #[error("collection is empty")]
    EmptyCollection,

    #[error("no candidates: every word is in the recent history")]
    NoCandidates,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("persistence error: {0}")]
    Persistence(#[from] StorageError),

    #[error("collection state lock poisoned")]
    StatePoisoned,
}
