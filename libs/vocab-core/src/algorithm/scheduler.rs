//! Next-word selection.
//!
//! Words in the recent history are never offered. Among the rest, words that
//! have cooled off (not asked inside the protected window) are preferred;
//! when every candidate is still warm the preference is dropped rather than
//! returning nothing. The highest weight wins and ties go to the earliest
//! word in collection order.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};

use super::{is_within_window, protected_window, weight};
use crate::error::{Result, VocabError};
use crate::types::{Collection, WordRecord};

/// Number of recently asked terms excluded from selection.
pub const DEFAULT_HISTORY_CAPACITY: usize = 2;

/// Selection rule with configurable parameters.
#[derive(Debug, Clone)]
pub struct Scheduler {
    pub history_capacity: usize,
    pub protected_window: Duration,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            protected_window: protected_window(),
        }
    }
}

impl Scheduler {
    /// Pick the next word to ask, stamping it with `now` and recording it in
    /// the recent history. The collection is left untouched on error.
    pub fn select_next(
        &self,
        collection: &mut Collection,
        now: DateTime<Utc>,
    ) -> Result<WordRecord> {
        if collection.words.is_empty() {
            return Err(VocabError::EmptyCollection);
        }

        let candidates: Vec<usize> = collection
            .words
            .iter()
            .enumerate()
            .filter(|(_, word)| !collection.recent_history.contains(&word.term))
            .map(|(index, _)| index)
            .collect();
        if candidates.is_empty() {
            return Err(VocabError::NoCandidates);
        }

        let cooled: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&index| {
                !is_within_window(
                    collection.words[index].last_asked,
                    now,
                    self.protected_window,
                )
            })
            .collect();
        let pool = if cooled.is_empty() { candidates } else { cooled };

        let mut selected = pool[0];
        let mut best = f64::NEG_INFINITY;
        for &index in &pool {
            let score = weight(&collection.words[index]);
            collection.words[index].weight = Some(score);
            // Strictly greater keeps the first of equal weights.
            if score > best {
                best = score;
                selected = index;
            }
        }

        let term = collection.words[selected].term.clone();
        self.remember(&mut collection.recent_history, term);

        let word = &mut collection.words[selected];
        word.last_asked = Some(now);
        Ok(word.clone())
    }

    /// Append a term, evicting the oldest entries beyond capacity.
    pub fn remember(&self, history: &mut VecDeque<String>, term: String) {
        history.push_back(term);
        while history.len() > self.history_capacity {
            history.pop_front();
        }
    }
}
