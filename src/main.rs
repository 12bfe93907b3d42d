use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use pomodoro::cli::args::Cli;
use pomodoro::error::PomodoroError;

fn main() {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        if let Err(e) = init_logging(path) {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), PomodoroError> {
    pomodoro::tui::run(cli.config())
}

/// Send tracing output to `path`; stdout belongs to the countdown.
fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pomodoro=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_logging_writes_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pomodoro.log");

        init_logging(&path).unwrap();
        tracing::info!(target: "pomodoro", "interval started");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("interval started"));
    }

    #[test]
    fn test_init_logging_unwritable_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("pomodoro.log");

        let err = init_logging(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to open log file"));
    }
}
