//! # Activity Command
//!
//! Date-ranged commit report over matching local branches. Each branch gets
//! its own log query; a branch whose query fails is skipped so one broken
//! ref cannot abort the whole report.

use std::env;

use anyhow::{Context, Result};
use clap::Args;
use gitc_core::git::{LogOptions, log_commits};
use gitc_core::output::print_warning;
use gitc_core::{parse_log_rows, resolve_branches};
use owo_colors::OwoColorize;

/// Arguments for the activity command
#[derive(Args)]
pub struct ActivityArgs {
  /// Lower date bound, passed to git log --since (e.g. "yesterday",
  /// "2025-08-01")
  #[arg(long)]
  pub since: String,

  /// Upper date bound, passed to git log --until
  #[arg(long)]
  pub until: Option<String>,

  /// Branch pattern: comma-separated glob list, or a regex with --regex
  #[arg(long, default_value = "*")]
  pub branch: String,

  /// Treat the branch pattern as a regular expression
  #[arg(long)]
  pub regex: bool,

  /// Only count commits by this author
  #[arg(long)]
  pub author: Option<String>,

  /// Maximum commits shown per branch; 0 means unlimited
  #[arg(long, default_value_t = 0)]
  pub limit: usize,
}

/// Handle the activity command
pub(crate) fn handle_activity_command(args: ActivityArgs) -> Result<()> {
  let repo_path = env::current_dir().context("Failed to determine current directory")?;

  // Activity is a local-branch report; remotes are never queried here
  let mut refs = resolve_branches(&repo_path, &args.branch, args.regex, true, false)?;
  if refs.is_empty() {
    print_warning("No local branches matched.");
    return Ok(());
  }
  refs.sort_by_key(|r| r.name.to_lowercase());

  let mut total = 0;
  for r in &refs {
    let opts = LogOptions {
      since: Some(&args.since),
      until: args.until.as_deref(),
      author: args.author.as_deref(),
      max_count: args.limit,
      ..Default::default()
    };
    let out = log_commits(&repo_path, Some(&r.name), &opts)?;
    if !out.success {
      continue;
    }
    let hits = parse_log_rows(&out.stdout);
    if hits.is_empty() {
      continue;
    }

    println!("\n{}", format!("[{}] - {} commit(s)", r.name, hits.len()).bold());
    total += hits.len();
    for hit in &hits {
      println!("  {:<8.8}  {:<10.10}  {}", hit.hash, hit.date, hit.subject);
    }
  }

  if total == 0 {
    print_warning("No activity found.");
  } else {
    println!("\n{}", format!("Total commits: {total}").bold());
  }
  Ok(())
}
