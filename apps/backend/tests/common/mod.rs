//! Common test utilities for integration tests.
//!
//! Provides a TestContext backed by a JSON data file in a temporary
//! directory, plus helpers for seeding it.

pub mod fixtures;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tempfile::TempDir;

use vocab_core::{Collection, JsonFileStorage, Scheduler, Storage, WordRepository};
use vocab_drill_backend::cli::Command;
use vocab_drill_backend::commands;
use vocab_drill_backend::error::Result;

/// Test context owning a temporary data directory.
pub struct TestContext {
    _dir: TempDir,
    pub data_file: PathBuf,
}

impl TestContext {
    /// Create a context with no data file on disk yet.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_file = dir.path().join("data.json");
        Self {
            _dir: dir,
            data_file,
        }
    }

    /// Create a context whose data file already holds `collection`.
    pub fn with_collection(collection: &Collection) -> Self {
        let ctx = Self::new();
        JsonFileStorage::new(&ctx.data_file)
            .save(collection)
            .expect("Failed to seed data file");
        ctx
    }

    /// Open a fresh repository over the data file, as each CLI run does.
    pub fn repo(&self) -> WordRepository<JsonFileStorage> {
        WordRepository::open(JsonFileStorage::new(&self.data_file), Scheduler::default())
            .expect("Failed to open repository")
    }

    /// Run one command in a fresh repository.
    pub fn run(&self, command: Command) -> Result<Value> {
        self.run_at(command, Utc::now())
    }

    pub fn run_at(&self, command: Command, now: DateTime<Utc>) -> Result<Value> {
        commands::execute(&self.repo(), command, now)
    }

    /// Collection as currently stored on disk.
    pub fn stored(&self) -> Collection {
        JsonFileStorage::new(&self.data_file)
            .load()
            .expect("Failed to read data file")
    }

    /// Raw bytes of the data file.
    pub fn raw(&self) -> Vec<u8> {
        std::fs::read(&self.data_file).expect("Failed to read data file")
    }
}
