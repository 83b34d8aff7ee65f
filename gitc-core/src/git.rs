//! # Git Subprocess Layer
//!
//! Shared utilities for spawning git sub-processes and capturing their output.
//! Every repository query and mutation in gitc goes through [`run_git`]: a
//! single blocking call with no timeout and no retry. A non-zero exit status
//! is captured, not escalated; callers decide whether it is fatal.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::consts::GIT_EXECUTABLE;
use crate::error::GitcError;

/// Output from a git command: trimmed stdout/stderr plus whether the process
/// exited successfully (exit code 0).
pub struct GitOutput {
  /// Whether the command exited with status code 0.
  pub success: bool,
  /// Trimmed standard output.
  pub stdout: String,
  /// Trimmed standard error.
  pub stderr: String,
}

impl GitOutput {
  /// The message to surface to a user: stderr when git wrote one, stdout
  /// otherwise.
  pub fn message(&self) -> &str {
    if self.stderr.is_empty() { &self.stdout } else { &self.stderr }
  }
}

/// Execute a git command in `repo_path` and capture its output.
///
/// Only a spawn failure (e.g. git missing from PATH) is an error; a non-zero
/// exit from git itself is reported through [`GitOutput::success`].
pub fn run_git(repo_path: &Path, args: &[&str]) -> Result<GitOutput, GitcError> {
  debug!("running git {:?} in {}", args, repo_path.display());
  let output = Command::new(GIT_EXECUTABLE)
    .args(args)
    .current_dir(repo_path)
    .output()?;

  Ok(GitOutput {
    success: output.status.success(),
    stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
    stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
  })
}

/// Verify that `repo_path` is inside a git work tree.
pub fn ensure_git_repo(repo_path: &Path) -> Result<(), GitcError> {
  let out = run_git(repo_path, &["rev-parse", "--is-inside-work-tree"])?;
  if out.success && out.stdout == "true" {
    Ok(())
  } else {
    Err(GitcError::NotARepository)
  }
}

/// Short name of the currently checked-out branch, or `None` when it cannot
/// be determined (detached HEAD, query failure).
pub fn current_branch(repo_path: &Path) -> Option<String> {
  let out = run_git(repo_path, &["rev-parse", "--abbrev-ref", "HEAD"]).ok()?;
  if out.success && !out.stdout.is_empty() {
    Some(out.stdout)
  } else {
    None
  }
}

/// Delete a local branch with `git branch -d` (or `-D` when `force`).
///
/// The outcome is returned for inline reporting; a refused deletion is not an
/// error from this layer's point of view.
pub fn delete_branch(repo_path: &Path, name: &str, force: bool) -> Result<GitOutput, GitcError> {
  run_git(repo_path, &["branch", if force { "-D" } else { "-d" }, name])
}

/// Cherry-pick a commit by hash, surfacing git's own message verbatim.
pub fn cherry_pick(repo_path: &Path, hash: &str) -> Result<GitOutput, GitcError> {
  run_git(repo_path, &["cherry-pick", hash])
}

/// Options for a `git log` query.
///
/// Covers both the per-branch activity report and the message search; unset
/// fields are simply omitted from the command line.
#[derive(Default)]
pub struct LogOptions<'a> {
  /// Search across all refs (`--all`) instead of a single branch.
  pub all: bool,
  /// Filter subjects with `--grep`.
  pub grep: Option<&'a str>,
  /// Case-insensitive `--grep` matching.
  pub ignore_case: bool,
  pub author: Option<&'a str>,
  pub since: Option<&'a str>,
  pub until: Option<&'a str>,
  /// Maximum number of commits; 0 means unlimited.
  pub max_count: usize,
}

/// Run `git log` with `--pretty=%h|%ad|%s --date=short` over either a single
/// branch or all refs.
pub fn log_commits(repo_path: &Path, branch: Option<&str>, opts: &LogOptions) -> Result<GitOutput, GitcError> {
  let mut args: Vec<String> = vec!["log".to_string()];
  if let Some(branch) = branch {
    args.push(branch.to_string());
  }
  if opts.all {
    args.push("--all".to_string());
  }
  args.push("--pretty=%h|%ad|%s".to_string());
  args.push("--date=short".to_string());
  if let Some(grep) = opts.grep {
    args.push(format!("--grep={grep}"));
    if opts.ignore_case {
      args.push("--regexp-ignore-case".to_string());
    }
  }
  if let Some(author) = opts.author {
    args.push(format!("--author={author}"));
  }
  if let Some(since) = opts.since {
    args.push(format!("--since={since}"));
  }
  if let Some(until) = opts.until {
    args.push(format!("--until={until}"));
  }
  if opts.max_count > 0 {
    args.push(format!("--max-count={}", opts.max_count));
  }

  let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
  run_git(repo_path, &arg_refs)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_message_prefers_stderr() {
    let out = GitOutput {
      success: false,
      stdout: "something".to_string(),
      stderr: "fatal: oops".to_string(),
    };
    assert_eq!(out.message(), "fatal: oops");

    let out = GitOutput {
      success: true,
      stdout: "ok".to_string(),
      stderr: String::new(),
    };
    assert_eq!(out.message(), "ok");
  }

  #[test]
  fn test_ensure_git_repo_rejects_plain_directory() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let err = ensure_git_repo(dir.path()).expect_err("plain directory should not pass the repo check");
    assert!(matches!(err, GitcError::NotARepository));
  }
}
