//! Environment configuration.

use std::path::PathBuf;

use chrono::Duration;
use vocab_core::{Scheduler, DEFAULT_HISTORY_CAPACITY, PROTECTED_WINDOW_DAYS};

use crate::error::{CliError, Result};

pub const DEFAULT_DATA_FILE: &str = "data.json";

const MAX_PROTECTED_WINDOW_DAYS: i64 = 36_500;

/// Host settings.
///
/// Env vars (all optional):
/// - VOCAB_DATA_FILE: Path of the JSON data file
/// - VOCAB_HISTORY_CAPACITY: Recently asked terms excluded from selection
/// - VOCAB_PROTECTED_WINDOW_DAYS: Days a word stays deprioritised after being asked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    pub history_capacity: usize,
    pub protected_window_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            protected_window_days: PROTECTED_WINDOW_DAYS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, falling back to defaults for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup("VOCAB_DATA_FILE").filter(|p| !p.trim().is_empty()) {
            config.data_file = PathBuf::from(path);
        }

        if let Some(raw) = lookup("VOCAB_HISTORY_CAPACITY") {
            let capacity: usize = raw.trim().parse().map_err(|_| {
                CliError::Config(format!("VOCAB_HISTORY_CAPACITY is not a number: {}", raw))
            })?;
            if capacity == 0 {
                return Err(CliError::Config(
                    "VOCAB_HISTORY_CAPACITY must be at least 1".to_string(),
                ));
            }
            config.history_capacity = capacity;
        }

        if let Some(raw) = lookup("VOCAB_PROTECTED_WINDOW_DAYS") {
            let days: i64 = raw.trim().parse().map_err(|_| {
                CliError::Config(format!(
                    "VOCAB_PROTECTED_WINDOW_DAYS is not a number: {}",
                    raw
                ))
            })?;
            if !(0..=MAX_PROTECTED_WINDOW_DAYS).contains(&days) {
                return Err(CliError::Config(format!(
                    "VOCAB_PROTECTED_WINDOW_DAYS must be between 0 and {}",
                    MAX_PROTECTED_WINDOW_DAYS
                )));
            }
            config.protected_window_days = days;
        }

        Ok(config)
    }

    pub fn scheduler(&self) -> Scheduler {
        Scheduler {
            history_capacity: self.history_capacity,
            protected_window: Duration::days(self.protected_window_days),
        }
    }
}
