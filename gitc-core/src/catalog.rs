//! # Ref Catalog
//!
//! Loads the full set of local and/or remote-tracking branch refs with their
//! metadata in a single `git for-each-ref` call. The resulting catalog is an
//! immutable snapshot: one per command invocation, filtered and rendered,
//! then discarded.

use std::path::Path;

use tracing::trace;

use crate::error::GitcError;
use crate::git::{ensure_git_repo, run_git};

/// Field layout requested from `for-each-ref`. Note the two date fields:
/// committer date (ISO, for display) and author date (unix, for staleness
/// cutoffs). They are kept as separate record fields on purpose.
const REF_FORMAT: &str = "%(refname:short)|%(committerdate:iso-strict)|%(upstream:short)|%(authordate:unix)";

/// Whether a ref is a local branch or a remote-tracking one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RefScope {
  Local,
  Remote,
}

impl RefScope {
  /// Classify purely from the name shape: a known remote prefix or two or
  /// more path separators means remote. This is recomputed per record, never
  /// inherited from which query produced the row.
  pub fn classify(name: &str) -> Self {
    if name.starts_with("origin/") || name.starts_with("upstream/") || name.matches('/').count() >= 2 {
      RefScope::Remote
    } else {
      RefScope::Local
    }
  }

  pub const fn as_str(self) -> &'static str {
    match self {
      RefScope::Local => "local",
      RefScope::Remote => "remote",
    }
  }
}

/// One branch ref known to the repository.
#[derive(Debug, Clone)]
pub struct RefRecord {
  /// Short ref name, e.g. `feature/x` or `origin/main`.
  pub name: String,
  pub scope: RefScope,
  /// Short name of the tracked upstream ref, when one is configured.
  pub upstream: Option<String>,
  /// Committer date of the tip commit (ISO-8601 strict), for display.
  pub commit_date: Option<String>,
  /// Author date of the tip commit (unix seconds), for staleness cutoffs.
  pub last_commit_ts: Option<i64>,
}

/// Parse one `for-each-ref` row. Rows with the wrong field count are dropped
/// by returning `None`; a malformed row never fails the whole load.
fn parse_ref_row(line: &str) -> Option<RefRecord> {
  let parts: Vec<&str> = line.split('|').collect();
  if parts.len() != 4 {
    trace!("skipping malformed ref row: {line:?}");
    return None;
  }
  let [name, date_iso, upstream, ts] = [parts[0], parts[1], parts[2], parts[3]];
  let last_commit_ts = if !ts.is_empty() && ts.bytes().all(|b| b.is_ascii_digit()) {
    ts.parse().ok()
  } else {
    None
  };
  Some(RefRecord {
    name: name.to_string(),
    scope: RefScope::classify(name),
    upstream: if upstream.is_empty() { None } else { Some(upstream.to_string()) },
    commit_date: if date_iso.is_empty() { None } else { Some(date_iso.to_string()) },
    last_commit_ts,
  })
}

/// Load the ref catalog for `repo_path`.
///
/// Fails with [`GitcError::NotARepository`] outside a work tree and
/// [`GitcError::Query`] when `for-each-ref` exits non-zero. Requesting
/// neither kind yields an empty catalog without touching git.
pub fn load_refs(repo_path: &Path, include_locals: bool, include_remotes: bool) -> Result<Vec<RefRecord>, GitcError> {
  ensure_git_repo(repo_path)?;

  let mut ref_kinds = Vec::new();
  if include_locals {
    ref_kinds.push("refs/heads");
  }
  if include_remotes {
    ref_kinds.push("refs/remotes");
  }
  if ref_kinds.is_empty() {
    return Ok(Vec::new());
  }

  let format_arg = format!("--format={REF_FORMAT}");
  let mut args = vec!["for-each-ref", format_arg.as_str()];
  args.extend(ref_kinds);

  let out = run_git(repo_path, &args)?;
  if !out.success {
    let message = if out.message().is_empty() {
      "git for-each-ref failed".to_string()
    } else {
      out.message().to_string()
    };
    return Err(GitcError::Query(message));
  }

  Ok(out.stdout.lines().filter_map(parse_ref_row).collect())
}
