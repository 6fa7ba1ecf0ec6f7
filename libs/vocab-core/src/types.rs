//! Core types for the vocabulary drill.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One vocabulary entry with its learning statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    pub id: String,
    #[serde(alias = "word")]
    pub term: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub times_correct: u32,
    #[serde(default)]
    pub consecutive_correct: u32,
    #[serde(default)]
    pub incorrect_count: u32,
    #[serde(default)]
    pub last_asked: Option<DateTime<Utc>>,
    /// Priority from the most recent selection pass. Never read back from storage.
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl WordRecord {
    /// Create a never-asked record with a fresh id.
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            term: term.into(),
            definition: definition.into(),
            times_correct: 0,
            consecutive_correct: 0,
            incorrect_count: 0,
            last_asked: None,
            weight: None,
        }
    }
}

/// The full persisted document: all words plus the do-not-repeat list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub words: Vec<WordRecord>,
    #[serde(default, alias = "last_asked_list")]
    pub recent_history: VecDeque<String>,
}

/// Outcome of a quiz answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
}

impl AnswerOutcome {
    pub fn from_correct(correct: bool) -> Self {
        if correct { Self::Correct } else { Self::Incorrect }
    }
}

/// Summary counts over a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionStats {
    pub total_words: usize,
    pub never_asked: usize,
    pub in_recent_history: usize,
    pub total_correct: u64,
    pub total_incorrect: u64,
}
