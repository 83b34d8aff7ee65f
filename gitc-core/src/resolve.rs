//! # Branch Resolution & Staleness Classification
//!
//! The pattern resolver filters a loaded ref catalog through a
//! [`PatternMatcher`]; the staleness classifier additionally applies the
//! protected/keep exclusions, the current-branch exclusion, and an age
//! cutoff. Classification itself is pure; the IO wrapper
//! [`find_stale_branches`] glues it to the subprocess layer.

use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};

use crate::age::parse_age;
use crate::catalog::{RefRecord, RefScope, load_refs};
use crate::consts::PROTECTED_BRANCHES;
use crate::error::GitcError;
use crate::git::{current_branch, ensure_git_repo};
use crate::pattern::PatternMatcher;

/// Resolve branches whose name matches `pattern` across the requested
/// scopes. Order follows the underlying catalog; display ordering is the
/// caller's concern.
pub fn resolve_branches(
  repo_path: &Path,
  pattern: &str,
  is_regex: bool,
  include_locals: bool,
  include_remotes: bool,
) -> Result<Vec<RefRecord>, GitcError> {
  let matcher = PatternMatcher::new(pattern, is_regex)?;
  let refs = load_refs(repo_path, include_locals, include_remotes)?;
  Ok(refs.into_iter().filter(|r| matcher.matches(&r.name)).collect())
}

/// Result of a staleness classification pass.
#[derive(Debug)]
pub struct StaleReport {
  /// All stale refs, local and remote.
  pub stale: Vec<RefRecord>,
  /// Names of the stale local branches. Remote refs are reported but never
  /// proposed for deletion.
  pub delete_candidates: Vec<String>,
}

/// Build the combined protect/keep matcher: the fixed protected set joined
/// with the comma-split, trimmed keep entries, compiled as ONE pattern in the
/// caller's chosen mode.
pub fn stale_matcher(keep: &str, is_regex: bool) -> Result<PatternMatcher, GitcError> {
  let mut names: Vec<&str> = PROTECTED_BRANCHES.to_vec();
  names.extend(keep.split(',').map(str::trim).filter(|k| !k.is_empty()));
  PatternMatcher::new(&names.join(","), is_regex)
}

/// Classify `refs` against `cutoff`.
///
/// A ref survives (is stale) only when it is not protected/kept, is not the
/// current branch, carries an author timestamp, and that timestamp is at or
/// before the cutoff instant.
pub fn classify_stale(
  refs: &[RefRecord],
  cutoff: DateTime<Utc>,
  protect: &PatternMatcher,
  current_branch: Option<&str>,
) -> StaleReport {
  let mut stale = Vec::new();
  let mut delete_candidates = Vec::new();

  for r in refs {
    if protect.matches(&r.name) {
      continue;
    }
    if current_branch == Some(r.name.as_str()) {
      continue;
    }
    let Some(ts) = r.last_commit_ts else { continue };
    let Some(last) = Utc.timestamp_opt(ts, 0).single() else { continue };
    if last > cutoff {
      continue;
    }
    if r.scope == RefScope::Local {
      delete_candidates.push(r.name.clone());
    }
    stale.push(r.clone());
  }

  StaleReport { stale, delete_candidates }
}

/// Load the catalog and classify it against an age expression.
///
/// Locals are always included; remotes only on request. Fails with
/// [`GitcError::InvalidAgeFormat`] before touching the catalog when the
/// expression is malformed.
pub fn find_stale_branches(
  repo_path: &Path,
  age_expr: &str,
  include_remotes: bool,
  keep: &str,
  is_regex: bool,
) -> Result<StaleReport, GitcError> {
  ensure_git_repo(repo_path)?;
  let cutoff = Utc::now() - parse_age(age_expr)?;
  let current = current_branch(repo_path);
  let refs = load_refs(repo_path, true, include_remotes)?;
  let protect = stale_matcher(keep, is_regex)?;
  Ok(classify_stale(&refs, cutoff, &protect, current.as_deref()))
}
