//! # Gitc CLI Entry Point
//!
//! The main entry point for the gitc command-line tool: enhanced git
//! wrappers for branch search, activity reports, stale-branch cleanup, and
//! commit-message search.

use std::process::ExitCode;

use clap::Parser;
use gitc_cli::cli;
use gitc_core::GitcError;
use gitc_core::output::print_error;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
  // Parse CLI arguments using the derive-based implementation
  let cmd = cli::Cli::parse();

  // Set up tracing based on verbosity level
  let level = match cmd.verbose {
    0 => tracing::Level::WARN,  // Default: warnings and errors
    1 => tracing::Level::INFO,  // -v: info, warnings, and errors
    2 => tracing::Level::DEBUG, // -vv: debug, info, warnings, and errors
    _ => tracing::Level::TRACE, // -vvv or more: trace and everything else
  };

  // Initialize the tracing subscriber with the specified level
  tracing_subscriber::registry()
    .with(fmt::layer())
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  debug!("Tracing initialized with level: {}", level);

  match cli::handle_cli(cmd) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      print_error(&format!("{err:#}"));
      // Typed errors carry their own exit code (1 for query failures, 2 for
      // bad input / preconditions); anything else is a generic failure.
      let code = err.downcast_ref::<GitcError>().map(GitcError::exit_code).unwrap_or(1);
      ExitCode::from(code as u8)
    }
  }
}
