//! lockr: find secrets by partial key.
//!
//! Reads candidate records from a JSON index (or one key per line on stdin),
//! ranks them, and either prints matches or runs an interactive picker.

mod args;
mod commands;
mod keys;
mod terminal;

use anyhow::{Context, Result};
use args::{Cli, Command};
use clap::Parser;
use lockr_core::types::{AppConfig, Candidate};
use lockr_core::{CandidateSource, IndexFile, LineSource};
use lockr_search::{InteractiveSession, ScoreOptions, ScoringEngine};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref()).context("failed to load config")?;
    let mut options = ScoreOptions::from(&config.search);
    options.case_sensitive |= cli.case_sensitive;

    let candidates =
        load_candidates(cli.index.as_deref()).context("failed to load candidates")?;
    info!(count = candidates.len(), "loaded candidates");

    let mut stdout = io::stdout().lock();
    match cli.command.unwrap_or(Command::Pick) {
        Command::Pick => {
            let mut stderr = io::stderr();
            if candidates.is_empty() {
                writeln!(stderr, "No secrets stored in vault")?;
                return Ok(ExitCode::FAILURE);
            }
            let session = InteractiveSession::with_options(
                candidates,
                options,
                config.interface.display_limit(),
            );
            let outcome = terminal::pick(session).context("interactive picker failed")?;
            if !commands::report_outcome(&mut stdout, &mut stderr, &outcome)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::List { pattern, limit } => {
            let engine = ScoringEngine::with_options(options);
            commands::list(
                &mut stdout,
                &engine,
                &candidates,
                pattern.as_deref(),
                limit,
            )?;
        }
        Command::Suggest { prefix, max } => {
            let engine = ScoringEngine::with_options(options);
            commands::suggest(&mut stdout, &engine, &candidates, &prefix, max)?;
        }
    }

    stdout.flush()?;
    Ok(ExitCode::SUCCESS)
}

/// Logs go to stderr. `RUST_LOG` overrides the verbosity flag.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> lockr_core::Result<AppConfig> {
    let Some(path) = path.map(Path::to_path_buf).or_else(AppConfig::default_path) else {
        debug!("no config directory, using defaults");
        return Ok(AppConfig::default());
    };

    debug!(path = %path.display(), "loading config");
    let config = AppConfig::load(&path)?;
    Ok(config.with_defaults_for_invalid())
}

fn load_candidates(index: Option<&Path>) -> lockr_core::Result<Vec<Candidate>> {
    let candidates = match index {
        Some(path) => IndexFile::new(path).load()?,
        None => LineSource::new(io::stdin().lock()).load()?,
    };
    Ok(candidates)
}
