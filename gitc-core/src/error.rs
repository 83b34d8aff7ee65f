//! # Error Taxonomy
//!
//! Typed errors for the gitc core, with the exit-code mapping the CLI uses:
//! query failures exit 1, user-input and precondition failures exit 2.
//! Per-branch mutation failures (delete, cherry-pick) are deliberately not
//! represented here; they are reported inline by the caller and never abort
//! the surrounding loop.

use std::io;

use thiserror::Error;

/// Errors that can occur while loading or classifying refs
#[derive(Debug, Error)]
pub enum GitcError {
  #[error("not inside a Git repository")]
  NotARepository,
  #[error("{0}")]
  Query(String),
  #[error("failed to invoke git: {0}")]
  Spawn(#[from] io::Error),
  #[error("invalid age expression '{0}': use formats like 30d, 12w, 6m, 1y")]
  InvalidAgeFormat(String),
  #[error("invalid pattern: {0}")]
  InvalidPattern(#[from] regex::Error),
  #[error("selection {index} is out of range: must be between 1 and {count}")]
  SelectionOutOfRange { index: usize, count: usize },
}

impl GitcError {
  /// Process exit code for this error
  pub fn exit_code(&self) -> i32 {
    match self {
      GitcError::Query(_) | GitcError::Spawn(_) => 1,
      GitcError::NotARepository
      | GitcError::InvalidAgeFormat(_)
      | GitcError::InvalidPattern(_)
      | GitcError::SelectionOutOfRange { .. } => 2,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_exit_codes() {
    assert_eq!(GitcError::NotARepository.exit_code(), 2);
    assert_eq!(GitcError::Query("boom".to_string()).exit_code(), 1);
    assert_eq!(GitcError::InvalidAgeFormat("12weeks".to_string()).exit_code(), 2);
    assert_eq!(GitcError::SelectionOutOfRange { index: 9, count: 3 }.exit_code(), 2);
  }

  #[test]
  fn test_query_error_surfaces_underlying_message() {
    let err = GitcError::Query("fatal: bad revision".to_string());
    assert_eq!(err.to_string(), "fatal: bad revision");
  }
}
