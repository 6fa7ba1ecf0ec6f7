//! Test fixtures and factory functions for creating test data.

use chrono::{DateTime, Utc};

use vocab_core::{Collection, WordRecord};

/// Create a word with the given statistics.
pub fn word(
    term: &str,
    times_correct: u32,
    consecutive_correct: u32,
    incorrect_count: u32,
    last_asked: Option<DateTime<Utc>>,
) -> WordRecord {
    WordRecord {
        times_correct,
        consecutive_correct,
        incorrect_count,
        last_asked,
        ..WordRecord::new(term, format!("definition of {}", term))
    }
}

/// Create a collection with an empty recent history.
pub fn collection(words: Vec<WordRecord>) -> Collection {
    Collection::new(words)
}

/// A data file using the legacy `word` and `last_asked_list` field names.
pub fn legacy_document() -> &'static str {
    r#"{
  "words": [
    {
      "id": "20241220050000123001",
      "word": "loose",
      "definition": "1. Not tight",
      "times_correct": 5,
      "consecutive_correct": 1,
      "incorrect_count": 2,
      "last_asked": "2024-12-01T10:00:00.000Z",
      "weight": 7.5
    },
    {
      "id": "20241220050000123002",
      "word": "brief",
      "definition": "1. Short",
      "times_correct": 1,
      "consecutive_correct": 0,
      "incorrect_count": 0,
      "last_asked": null
    },
    {
      "id": "20241220050000123003",
      "word": "zenith",
      "definition": "1. Peak",
      "times_correct": 9,
      "consecutive_correct": 0,
      "incorrect_count": 4,
      "last_asked": "2024-12-19T10:00:00.000Z"
    }
  ],
  "last_asked_list": ["zenith"]
}"#
}
