//! # Stale Command
//!
//! Reports branches whose tip is older than an age cutoff and optionally
//! deletes the local candidates. Deletion is best-effort over the set: each
//! branch is attempted independently and a failure is reported inline
//! without aborting the remaining deletions.

use std::env;

use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use clap::Args;
use gitc_core::consts::SHORT_DATE_FMT;
use gitc_core::git::delete_branch;
use gitc_core::output::print_warning;
use gitc_core::{RefRecord, find_stale_branches};
use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Arguments for the stale command
#[derive(Args)]
pub struct StaleArgs {
  /// Age cutoff expression: <n><unit> with unit d, w, m, or y (e.g. 12w)
  pub age: String,

  /// Include remote-tracking branches in the report
  #[arg(long = "remotes")]
  pub remotes: bool,

  /// Comma-separated branches to preserve in addition to protected ones
  #[arg(long, default_value = "")]
  pub keep: String,

  /// Treat the protected/keep list as a regular expression
  #[arg(long)]
  pub regex: bool,

  /// Delete stale local branches after reporting them
  #[arg(long)]
  pub delete: bool,

  /// Force-delete with git branch -D instead of -d
  #[arg(short = 'f', long)]
  pub force: bool,
}

#[derive(Tabled)]
struct StaleRow {
  #[tabled(rename = "BRANCH")]
  name: String,
  #[tabled(rename = "SCOPE")]
  scope: &'static str,
  #[tabled(rename = "UPSTREAM")]
  upstream: String,
  #[tabled(rename = "LAST_COMMIT")]
  last_commit: String,
}

/// Last-commit column derived from the author timestamp, which is also what
/// the cutoff was tested against.
fn last_commit_display(record: &RefRecord) -> String {
  record
    .last_commit_ts
    .and_then(|ts| Utc.timestamp_opt(ts, 0).single())
    .map(|dt| dt.format(SHORT_DATE_FMT).to_string())
    .unwrap_or_else(|| "-".to_string())
}

/// Handle the stale command
pub(crate) fn handle_stale_command(args: StaleArgs) -> Result<()> {
  let repo_path = env::current_dir().context("Failed to determine current directory")?;

  let report = find_stale_branches(&repo_path, &args.age, args.remotes, &args.keep, args.regex)?;
  if report.stale.is_empty() {
    print_warning("No stale branches found.");
    return Ok(());
  }

  let rows: Vec<StaleRow> = report
    .stale
    .iter()
    .map(|r| StaleRow {
      name: r.name.clone(),
      scope: r.scope.as_str(),
      upstream: r.upstream.clone().unwrap_or_else(|| "-".to_string()),
      last_commit: last_commit_display(r),
    })
    .collect();
  println!("{}", Table::new(rows).with(Style::sharp()));

  if args.delete && !report.delete_candidates.is_empty() {
    println!("\n{}", "Deleting local stale branches...".bold());
    for name in &report.delete_candidates {
      let out = delete_branch(&repo_path, name, args.force)?;
      if out.success {
        println!("  deleted: {name}");
      } else {
        println!("  failed: {name} - {}", out.message());
      }
    }
  }

  Ok(())
}
