//! # Commit Search Selector
//!
//! Parses `git log --pretty=%h|%ad|%s` rows into commit hits and selects one
//! by its 1-based display index for cherry-picking.

use crate::error::GitcError;

/// One commit produced by a log query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitHit {
  pub hash: String,
  pub date: String,
  pub subject: String,
}

/// Parse log output rows. A row that does not split into exactly three
/// fields degrades to the whole line as the hash with empty date/subject;
/// blank lines are dropped.
pub fn parse_log_rows(stdout: &str) -> Vec<CommitHit> {
  stdout
    .lines()
    .filter(|line| !line.trim().is_empty())
    .map(|line| {
      let parts: Vec<&str> = line.splitn(3, '|').collect();
      if let [hash, date, subject] = parts[..] {
        CommitHit {
          hash: hash.to_string(),
          date: date.to_string(),
          subject: subject.to_string(),
        }
      } else {
        CommitHit {
          hash: line.to_string(),
          date: String::new(),
          subject: String::new(),
        }
      }
    })
    .collect()
}

/// Select a hit by 1-based display index.
pub fn pick_by_index(hits: &[CommitHit], index: usize) -> Result<&CommitHit, GitcError> {
  if index < 1 || index > hits.len() {
    return Err(GitcError::SelectionOutOfRange {
      index,
      count: hits.len(),
    });
  }
  Ok(&hits[index - 1])
}
