//! Word lifecycle operations on an in-memory collection.

use crate::error::{Result, VocabError};
use crate::types::{Collection, CollectionStats, WordRecord};

impl Collection {
    pub fn new(words: Vec<WordRecord>) -> Self {
        Self {
            words,
            ..Default::default()
        }
    }

    pub fn find(&self, id: &str) -> Option<&WordRecord> {
        self.words.iter().find(|w| w.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut WordRecord> {
        self.words.iter_mut().find(|w| w.id == id)
    }

    /// Append a fresh word. The term is trimmed and must not be empty.
    pub fn add_word(&mut self, term: &str, definition: &str) -> Result<WordRecord> {
        let term = term.trim();
        if term.is_empty() {
            return Err(VocabError::InvalidInput("term must not be empty".to_string()));
        }

        let mut word = WordRecord::new(term, definition);
        // v4 collisions are not expected, but ids must stay unique.
        while self.find(&word.id).is_some() {
            word = WordRecord::new(term, definition);
        }

        self.words.push(word.clone());
        Ok(word)
    }

    /// Remove the first word with `id`. Returns whether one was removed.
    pub fn delete_word(&mut self, id: &str) -> bool {
        match self.words.iter().position(|w| w.id == id) {
            Some(index) => {
                self.words.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn stats(&self) -> CollectionStats {
        CollectionStats {
            total_words: self.words.len(),
            never_asked: self.words.iter().filter(|w| w.last_asked.is_none()).count(),
            in_recent_history: self
                .words
                .iter()
                .filter(|w| self.recent_history.contains(&w.term))
                .count(),
            total_correct: self.words.iter().map(|w| u64::from(w.times_correct)).sum(),
            total_incorrect: self.words.iter().map(|w| u64::from(w.incorrect_count)).sum(),
        }
    }
}
