//! # Find-Branch Command
//!
//! Resolves a glob/regex pattern against the full ref catalog and renders
//! the matches as a table, locals before remotes.

use std::env;

use anyhow::{Context, Result};
use clap::Args;
use gitc_core::output::print_warning;
use gitc_core::resolve_branches;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Arguments for the find-branch command
#[derive(Args)]
pub struct FindBranchArgs {
  /// Comma-separated glob list, or a regular expression with --regex
  pub pattern: String,

  /// Treat the pattern as a regular expression
  #[arg(long)]
  pub regex: bool,

  /// Exclude local branches from the search
  #[arg(long = "no-locals")]
  pub no_locals: bool,

  /// Exclude remote-tracking branches from the search
  #[arg(long = "no-remotes")]
  pub no_remotes: bool,
}

#[derive(Tabled)]
struct BranchRow {
  #[tabled(rename = "BRANCH")]
  name: String,
  #[tabled(rename = "SCOPE")]
  scope: &'static str,
  #[tabled(rename = "UPSTREAM")]
  upstream: String,
  #[tabled(rename = "LAST_COMMIT")]
  last_commit: String,
}

/// Handle the find-branch command
pub(crate) fn handle_find_branch_command(args: FindBranchArgs) -> Result<()> {
  let repo_path = env::current_dir().context("Failed to determine current directory")?;

  let mut matches = resolve_branches(
    &repo_path,
    &args.pattern,
    args.regex,
    !args.no_locals,
    !args.no_remotes,
  )?;
  if matches.is_empty() {
    print_warning("No branches matched.");
    return Ok(());
  }

  matches.sort_by_key(|r| (r.scope, r.name.to_lowercase()));
  let rows: Vec<BranchRow> = matches
    .iter()
    .map(|r| BranchRow {
      name: r.name.clone(),
      scope: r.scope.as_str(),
      upstream: r.upstream.clone().unwrap_or_else(|| "-".to_string()),
      // Committer date, ISO strict; the stale command uses the author date
      last_commit: r.commit_date.clone().unwrap_or_else(|| "-".to_string()),
    })
    .collect();

  println!("{}", Table::new(rows).with(Style::sharp()));
  Ok(())
}
