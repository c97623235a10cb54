use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use bedside_cli::cli::Cli;
use bedside_cli::commands::{self, Context};
use bedside_cli::config::{config_path, load_for_startup};

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let path = match cli.config.clone() {
        Some(path) => path,
        None => config_path()?,
    };
    let startup = load_for_startup(&path);
    let config = startup.config;

    // Logs go to stderr so stdout stays clean for piping.
    let default_filter = config.log_filter.as_deref().unwrap_or("warn");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    if let Some(e) = &startup.load_error {
        tracing::warn!(path = %path.display(), "ignoring config, using defaults: {e}");
    }
    if let Some(from) = startup.migrated_from {
        tracing::info!(path = %path.display(), from, "migrated config to current version");
    }

    let ctx = Context {
        format: cli.format.unwrap_or(config.default_format),
        config_path: &path,
        config: &config,
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stderr = io::stderr();
    let outcome = commands::run(cli.command, &ctx, &mut input, &mut stderr)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(outcome.output.as_bytes())?;
    stdout.flush()?;

    if let Some(notice) = &outcome.notice {
        eprintln!("{notice}");
    }

    Ok(if outcome.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
