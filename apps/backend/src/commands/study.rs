//! Quiz commands

use chrono::{DateTime, Utc};
use serde_json::Value;
use vocab_core::{Storage, WordRepository};

use crate::error::Result;

/// `next`
pub fn next<S: Storage>(repo: &WordRepository<S>, now: DateTime<Utc>) -> Result<Value> {
    let word = repo.select_next(now)?;
    Ok(serde_json::to_value(word)?)
}

/// `correct <id>`
pub fn correct<S: Storage>(repo: &WordRepository<S>, id: &str) -> Result<Value> {
    let word = repo.apply_correct(id)?;
    Ok(serde_json::to_value(word)?)
}

/// `incorrect <id>`
pub fn incorrect<S: Storage>(repo: &WordRepository<S>, id: &str) -> Result<Value> {
    let word = repo.apply_incorrect(id)?;
    Ok(serde_json::to_value(word)?)
}
