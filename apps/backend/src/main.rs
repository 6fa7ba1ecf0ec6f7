use std::process::ExitCode;

use clap::Parser;
use vocab_drill_backend::cli::Cli;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    vocab_drill_backend::init_tracing()?;

    match vocab_drill_backend::run(cli) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            tracing::debug!("Command failed: {:?}", e);
            eprintln!("{}", serde_json::to_string_pretty(&e.to_response())?);
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}
