//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "vocab-drill", about = "Vocabulary drill word store and scheduler", version)]
pub struct Cli {
    /// Data file to use (overrides VOCAB_DATA_FILE)
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List all words
    List,

    /// Select the next word to ask
    Next,

    /// Record a correct answer
    Correct {
        /// Word id
        id: String,
    },

    /// Record an incorrect answer
    Incorrect {
        /// Word id
        id: String,
    },

    /// Add a new word
    Add {
        /// The word itself
        term: String,
        /// Definition text (use "-" to read from stdin)
        definition: Option<String>,
    },

    /// Delete a word by id
    Delete {
        /// Word id
        id: String,
    },

    /// Show one word
    Show {
        /// Word id
        id: String,
    },

    /// Show collection statistics
    Stats,
}
