//! Answer outcomes applied to word statistics.

use crate::error::{Result, VocabError};
use crate::types::{AnswerOutcome, Collection, WordRecord};

impl WordRecord {
    pub fn record_correct(&mut self) {
        self.times_correct = self.times_correct.saturating_add(1);
        self.consecutive_correct = self.consecutive_correct.saturating_add(1);
    }

    /// Breaks the streak; the lifetime mistake count only grows.
    pub fn record_incorrect(&mut self) {
        self.consecutive_correct = 0;
        self.incorrect_count = self.incorrect_count.saturating_add(1);
    }

    pub fn record(&mut self, outcome: AnswerOutcome) {
        match outcome {
            AnswerOutcome::Correct => self.record_correct(),
            AnswerOutcome::Incorrect => self.record_incorrect(),
        }
    }
}

/// Apply an answer to the word with `id`. Nothing changes if it is missing.
pub fn apply_answer(
    collection: &mut Collection,
    id: &str,
    outcome: AnswerOutcome,
) -> Result<WordRecord> {
    let word = collection
        .find_mut(id)
        .ok_or_else(|| VocabError::WordNotFound(id.to_string()))?;
    word.record(outcome);
    Ok(word.clone())
}

pub fn apply_correct(collection: &mut Collection, id: &str) -> Result<WordRecord> {
    apply_answer(collection, id, AnswerOutcome::Correct)
}

pub fn apply_incorrect(collection: &mut Collection, id: &str) -> Result<WordRecord> {
    apply_answer(collection, id, AnswerOutcome::Incorrect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn collection_with(word: WordRecord) -> Collection {
        Collection {
            words: vec![word],
            ..Default::default()
        }
    }

    #[test]
    fn correct_increments_both_counters() {
        let word = WordRecord {
            times_correct: 4,
            consecutive_correct: 2,
            incorrect_count: 3,
            ..WordRecord::new("loose", "")
        };
        let id = word.id.clone();
        let mut collection = collection_with(word);

        let updated = apply_correct(&mut collection, &id).unwrap();

        assert_eq!(updated.times_correct, 5);
        assert_eq!(updated.consecutive_correct, 3);
        assert_eq!(updated.incorrect_count, 3);
        assert_eq!(collection.words[0], updated);
    }

    #[test]
    fn incorrect_resets_streak() {
        let word = WordRecord {
            times_correct: 4,
            consecutive_correct: 2,
            incorrect_count: 3,
            ..WordRecord::new("loose", "")
        };
        let id = word.id.clone();
        let mut collection = collection_with(word);

        let updated = apply_incorrect(&mut collection, &id).unwrap();

        assert_eq!(updated.times_correct, 4);
        assert_eq!(updated.consecutive_correct, 0);
        assert_eq!(updated.incorrect_count, 4);
    }

    #[test]
    fn streak_counts_since_last_mistake() {
        let mut word = WordRecord::new("brief", "");
        word.record(AnswerOutcome::Correct);
        word.record(AnswerOutcome::Correct);
        word.record(AnswerOutcome::Incorrect);
        word.record(AnswerOutcome::Correct);

        assert_eq!(word.times_correct, 3);
        assert_eq!(word.consecutive_correct, 1);
        assert_eq!(word.incorrect_count, 1);
    }

    #[test]
    fn counters_saturate() {
        let mut word = WordRecord {
            times_correct: u32::MAX,
            consecutive_correct: u32::MAX,
            incorrect_count: u32::MAX,
            ..WordRecord::new("max", "")
        };
        word.record_correct();
        word.record_incorrect();
        assert_eq!(word.times_correct, u32::MAX);
        assert_eq!(word.incorrect_count, u32::MAX);
    }

    #[test]
    fn missing_id_leaves_collection_unchanged() {
        let mut collection = collection_with(WordRecord::new("loose", ""));
        let before = collection.clone();

        let result = apply_answer(&mut collection, "nope", AnswerOutcome::Incorrect);

        assert!(matches!(result, Err(VocabError::WordNotFound(id)) if id == "nope"));
        assert_eq!(collection, before);
    }
}
