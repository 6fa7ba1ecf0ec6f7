pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

use std::io::Read;

use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::{JsonFileStorage, WordRepository};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::{CliError, Result};

/// Install the stderr log subscriber. Stdout carries command output only.
pub fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}

/// Load configuration, open the data file and run one command.
pub fn run(cli: Cli) -> Result<()> {
    dotenvy::dotenv().ok();

    let mut config = Config::from_env()?;
    if let Some(path) = cli.data_file {
        config.data_file = path;
    }

    tracing::debug!("Using data file {}", config.data_file.display());
    let storage = JsonFileStorage::new(&config.data_file);
    let repo = WordRepository::open(storage, config.scheduler())?;

    let command = resolve_stdin(cli.command)?;
    let output = commands::execute(&repo, command, Utc::now())?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// Replace a "-" definition with the contents of stdin.
fn resolve_stdin(command: Command) -> Result<Command> {
    match command {
        Command::Add {
            term,
            definition: Some(definition),
        } if definition == "-" => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| CliError::Internal(format!("failed to read stdin: {}", e)))?;
            Ok(Command::Add {
                term,
                definition: Some(buf.trim_end().to_string()),
            })
        }
        other => Ok(other),
    }
}
