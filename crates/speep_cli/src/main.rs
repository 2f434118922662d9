//! `speep` command-line entry point.
//!
//! # Responsibility
//! - Resolve the shortcut store once and hand it to core as configuration.
//! - Map core errors to a single stderr line and a non-zero exit status.

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use speep_core::{init_logging, JsonShortcutRepository, ShortcutService, StoreConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match cli.store {
        Some(path) => StoreConfig::at(path),
        None => StoreConfig::from_env().context("cannot locate the shortcut store")?,
    };
    start_logging(&config, cli.log_level.as_deref());

    let service = ShortcutService::new(JsonShortcutRepository::new(config));
    let mut stdout = std::io::stdout().lock();
    commands::dispatch(&service, cli.command, &mut stdout)
}

/// Logging is opt-in and best effort: a broken log directory must not block
/// the command.
fn start_logging(config: &StoreConfig, level: Option<&str>) {
    let Some(level) = level.filter(|level| !level.trim().eq_ignore_ascii_case("off")) else {
        return;
    };
    let log_dir = match std::path::absolute(config.store_path()) {
        Ok(store_path) => store_path
            .parent()
            .unwrap_or_else(|| std::path::Path::new("/"))
            .join("logs"),
        Err(err) => {
            eprintln!("warning: logging disabled: cannot resolve log directory: {err}");
            return;
        }
    };

    if let Err(err) = init_logging(level, &log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }
}
