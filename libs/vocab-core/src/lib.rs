//! Core vocabulary drill library.
//!
//! Provides:
//! - Word weighting and the three-day recency window
//! - Next-word scheduler with a short do-not-repeat history
//! - Correct/incorrect answer statistics
//! - Collection lifecycle (add, delete, list) and persistence backends
//! - A locked repository that persists every change before exposing it

pub mod algorithm;
pub mod collection;
pub mod error;
pub mod repository;
pub mod stats;
pub mod storage;
pub mod types;

pub use algorithm::{
    is_within_protected_window, is_within_window, weight, Scheduler, DEFAULT_HISTORY_CAPACITY,
    PROTECTED_WINDOW_DAYS,
};
pub use error::{Result, VocabError};
pub use repository::WordRepository;
pub use stats::{apply_answer, apply_correct, apply_incorrect};
pub use storage::{JsonFileStorage, MemoryStorage, Storage, StorageError};
pub use types::{AnswerOutcome, Collection, CollectionStats, WordRecord};
