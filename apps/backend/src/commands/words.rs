//! Word management commands

use serde_json::{json, Value};
use vocab_core::{Storage, WordRepository};

use crate::error::{CliError, Result};

/// `list`
pub fn list<S: Storage>(repo: &WordRepository<S>) -> Result<Value> {
    let words = repo.list_all()?;
    Ok(serde_json::to_value(words)?)
}

/// `show <id>`
pub fn show<S: Storage>(repo: &WordRepository<S>, id: &str) -> Result<Value> {
    let word = repo
        .get_word(id)?
        .ok_or_else(|| CliError::NotFound(format!("word {}", id)))?;
    Ok(serde_json::to_value(word)?)
}

/// `add <term> [definition]`
pub fn add<S: Storage>(repo: &WordRepository<S>, term: &str, definition: &str) -> Result<Value> {
    let word = repo.add_word(term, definition)?;
    Ok(serde_json::to_value(word)?)
}

/// `delete <id>`
pub fn delete<S: Storage>(repo: &WordRepository<S>, id: &str) -> Result<Value> {
    if !repo.delete_word(id)? {
        return Err(CliError::NotFound(format!("word {}", id)));
    }
    Ok(json!({ "deleted": true, "id": id }))
}

/// `stats`
pub fn stats<S: Storage>(repo: &WordRepository<S>) -> Result<Value> {
    let stats = repo.stats()?;
    Ok(serde_json::to_value(stats)?)
}
