//! # Search Command
//!
//! Greps commit subjects across refs, lists the hits with 1-based indices,
//! and optionally cherry-picks one of them. The cherry-pick outcome is
//! surfaced verbatim, not interpreted.

use std::env;

use anyhow::{Context, Result};
use clap::Args;
use gitc_core::git::{LogOptions, cherry_pick, log_commits};
use gitc_core::output::print_warning;
use gitc_core::{GitcError, ensure_git_repo, parse_log_rows, pick_by_index};
use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Arguments for the search command
#[derive(Args)]
pub struct SearchArgs {
  /// Text to grep for in commit subjects
  pub query: String,

  /// Search only the current branch instead of all refs
  #[arg(long = "no-all")]
  pub no_all: bool,

  /// Case-insensitive matching
  #[arg(short = 'i', long = "ignore-case")]
  pub ignore_case: bool,

  /// Only show commits by this author
  #[arg(long)]
  pub author: Option<String>,

  /// Lower date bound, passed to git log --since
  #[arg(long)]
  pub since: Option<String>,

  /// Upper date bound, passed to git log --until
  #[arg(long)]
  pub until: Option<String>,

  /// Cherry-pick the result with this 1-based index
  #[arg(long)]
  pub pick: Option<usize>,

  /// Maximum results listed; 0 means unlimited
  #[arg(long, default_value_t = 20)]
  pub show: usize,
}

#[derive(Tabled)]
struct SearchRow {
  #[tabled(rename = "#")]
  index: usize,
  #[tabled(rename = "HASH")]
  hash: String,
  #[tabled(rename = "DATE")]
  date: String,
  #[tabled(rename = "MESSAGE")]
  message: String,
}

/// Handle the search command
pub(crate) fn handle_search_command(args: SearchArgs) -> Result<()> {
  let repo_path = env::current_dir().context("Failed to determine current directory")?;
  ensure_git_repo(&repo_path)?;

  let opts = LogOptions {
    all: !args.no_all,
    grep: Some(&args.query),
    ignore_case: args.ignore_case,
    author: args.author.as_deref(),
    since: args.since.as_deref(),
    until: args.until.as_deref(),
    max_count: args.show,
  };
  let out = log_commits(&repo_path, None, &opts)?;
  if !out.success {
    let message = if out.message().is_empty() {
      "git log failed".to_string()
    } else {
      out.message().to_string()
    };
    return Err(GitcError::Query(message).into());
  }

  let hits = parse_log_rows(&out.stdout);
  if hits.is_empty() {
    print_warning("No matching commits.");
    return Ok(());
  }

  let rows: Vec<SearchRow> = hits
    .iter()
    .enumerate()
    .map(|(i, hit)| SearchRow {
      index: i + 1,
      hash: hit.hash.clone(),
      date: hit.date.clone(),
      message: hit.subject.clone(),
    })
    .collect();
  println!("{}", Table::new(rows).with(Style::sharp()));

  if let Some(pick) = args.pick {
    let target = pick_by_index(&hits, pick)?;
    println!("\n{}", format!("Cherry-picking {} ...", target.hash).bold());
    let result = cherry_pick(&repo_path, &target.hash)?;
    if result.success {
      println!("{}", result.stdout);
    } else {
      println!("{}", result.message());
    }
  }

  Ok(())
}
