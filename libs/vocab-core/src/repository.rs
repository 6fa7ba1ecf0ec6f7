//! Locked, persistent access to the word collection.

use std::sync::RwLock;

use chrono::{DateTime, Utc};

use crate::algorithm::Scheduler;
use crate::error::{Result, VocabError};
use crate::stats;
use crate::storage::Storage;
use crate::types::{Collection, CollectionStats, WordRecord};

/// Serialises every read-modify-write cycle against one collection.
///
/// Mutations run on a draft copy under the write lock. The draft replaces the
/// in-memory state only after the storage accepted it, so a failed save
/// leaves both sides as they were.
pub struct WordRepository<S: Storage> {
    storage: S,
    scheduler: Scheduler,
    state: RwLock<Collection>,
}

impl<S: Storage> WordRepository<S> {
    /// Load the collection from `storage`.
    pub fn open(storage: S, scheduler: Scheduler) -> Result<Self> {
        let collection = storage.load()?;
        tracing::info!("Opened collection with {} words", collection.words.len());
        Ok(Self {
            storage,
            scheduler,
            state: RwLock::new(collection),
        })
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn list_all(&self) -> Result<Vec<WordRecord>> {
        self.read(|collection| collection.words.clone())
    }

    pub fn get_word(&self, id: &str) -> Result<Option<WordRecord>> {
        self.read(|collection| collection.find(id).cloned())
    }

    pub fn stats(&self) -> Result<CollectionStats> {
        self.read(Collection::stats)
    }

    /// Select the next word to ask and persist the updated history.
    pub fn select_next(&self, now: DateTime<Utc>) -> Result<WordRecord> {
        let word = self.mutate(|draft| {
            let word = self.scheduler.select_next(draft, now)?;
            Ok((word, true))
        })?;
        tracing::info!("Selected '{}' (weight {:?})", word.term, word.weight);
        Ok(word)
    }

    pub fn apply_correct(&self, id: &str) -> Result<WordRecord> {
        let word = self.mutate(|draft| Ok((stats::apply_correct(draft, id)?, true)))?;
        tracing::info!("Recorded correct answer for '{}'", word.term);
        Ok(word)
    }

    pub fn apply_incorrect(&self, id: &str) -> Result<WordRecord> {
        let word = self.mutate(|draft| Ok((stats::apply_incorrect(draft, id)?, true)))?;
        tracing::info!("Recorded incorrect answer for '{}'", word.term);
        Ok(word)
    }

    pub fn add_word(&self, term: &str, definition: &str) -> Result<WordRecord> {
        let word = self.mutate(|draft| Ok((draft.add_word(term, definition)?, true)))?;
        tracing::info!("Added '{}' as {}", word.term, word.id);
        Ok(word)
    }

    /// Remove a word by id. An unknown id returns `false` and writes nothing.
    pub fn delete_word(&self, id: &str) -> Result<bool> {
        let deleted = self.mutate(|draft| {
            let deleted = draft.delete_word(id);
            Ok((deleted, deleted))
        })?;
        if deleted {
            tracing::info!("Deleted word {}", id);
        }
        Ok(deleted)
    }

    fn read<T>(&self, f: impl FnOnce(&Collection) -> T) -> Result<T> {
        let state = self.state.read().map_err(|_| VocabError::StatePoisoned)?;
        Ok(f(&state))
    }

    /// `f` returns its output and whether the draft changed.
    fn mutate<T>(&self, f: impl FnOnce(&mut Collection) -> Result<(T, bool)>) -> Result<T> {
        let mut state = self.state.write().map_err(|_| VocabError::StatePoisoned)?;
        let mut draft = state.clone();

        let (output, changed) = f(&mut draft)?;
        if changed {
            if let Err(e) = self.storage.save(&draft) {
                tracing::error!("Failed to save collection: {}", e);
                return Err(e.into());
            }
            *state = draft;
        }
        Ok(output)
    }
}
