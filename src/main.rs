use std::process::ExitCode;

use clap::Parser;
use colored::*;
use smed::app::App;
use smed::cli::Cli;
use smed::constants;
use smed::error::format_error_chain;
use smed::paths;

#[tokio::main]
async fn main() -> ExitCode {
    // before tracing, so a RUST_LOG pinned in .env takes effect
    let env_file = paths::load_env_file();

    // stderr only; stdout carries secret names and values
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| constants::cli::DEFAULT_LOG_FILTER.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = env_file {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    let cli = Cli::parse();

    match App::run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), format_error_chain(&err));
            ExitCode::FAILURE
        }
    }
}
