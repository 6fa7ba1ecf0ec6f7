//! Error handling for the command-line host

use serde::Serialize;
use thiserror::Error;
use vocab_core::VocabError;

/// Host error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Vocab(#[from] VocabError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error body written to stderr
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl CliError {
    /// Machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Vocab(e) => match e {
                VocabError::WordNotFound(_) => "not_found",
                VocabError::InvalidInput(_) => "bad_request",
                VocabError::EmptyCollection => "empty_collection",
                VocabError::NoCandidates => "no_candidates",
                VocabError::Persistence(_) => "persistence_error",
                VocabError::StatePoisoned => "internal_error",
            },
            CliError::Config(_) => "config_error",
            CliError::NotFound(_) => "not_found",
            CliError::Json(_) | CliError::Internal(_) => "internal_error",
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self.kind() {
            "not_found" => 2,
            "bad_request" => 3,
            "empty_collection" | "no_candidates" => 4,
            "persistence_error" => 5,
            "config_error" => 6,
            _ => 1,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
        }
    }
}

/// Result type alias for host operations
pub type Result<T> = std::result::Result<T, CliError>;
