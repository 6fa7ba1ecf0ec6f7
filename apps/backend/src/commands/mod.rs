//! Command handlers. Each returns the JSON document printed on success.

pub mod study;
pub mod words;

use chrono::{DateTime, Utc};
use serde_json::Value;
use vocab_core::{Storage, WordRepository};

use crate::cli::Command;
use crate::error::Result;

/// Run one command against the repository.
pub fn execute<S: Storage>(
    repo: &WordRepository<S>,
    command: Command,
    now: DateTime<Utc>,
) -> Result<Value> {
    match command {
        Command::List => words::list(repo),
        Command::Next => study::next(repo, now),
        Command::Correct { id } => study::correct(repo, &id),
        Command::Incorrect { id } => study::incorrect(repo, &id),
        Command::Add { term, definition } => {
            words::add(repo, &term, &definition.unwrap_or_default())
        }
        Command::Delete { id } => words::delete(repo, &id),
        Command::Show { id } => words::show(repo, &id),
        Command::Stats => words::stats(repo),
    }
}
