//! Git repository management for testing
//!
//! Provides a temporary git repository guard and helpers for creating
//! commits and branches. Commits can carry explicit timestamps so tests can
//! build repositories with old branch tips deterministically.

use std::fs;
use std::path::Path;

use anyhow::Result;
use git2::{BranchType, Repository, Signature, Time};
use tempfile::TempDir;

/// A test guard that creates a temporary git repository. The directory and
/// everything in it are removed when the guard is dropped.
pub struct GitRepoTestGuard {
  /// The temporary directory containing the git repository
  pub temp_dir: TempDir,
  /// The git repository
  pub repo: Repository,
}

impl GitRepoTestGuard {
  /// Create a new test git repository
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let temp_path = temp_dir.path();

    let repo = Repository::init(temp_path).expect("Failed to initialize git repository");

    // Set test user configuration
    let mut config = repo.config().expect("Failed to get repository config");
    config
      .set_str("user.name", "Gitc Test User")
      .expect("Failed to set user.name");
    config
      .set_str("user.email", "gitc-test@example.com")
      .expect("Failed to set user.email");

    assert!(
      temp_path.join(".git").exists(),
      "Git repository was not properly initialized"
    );

    Self { temp_dir, repo }
  }

  /// Get the path to the git repository
  pub fn path(&self) -> &Path {
    self.temp_dir.path()
  }
}

impl Default for GitRepoTestGuard {
  fn default() -> Self {
    Self::new()
  }
}

/// Helper function to create a commit in a repository
pub fn create_commit(repo: &Repository, file_name: &str, content: &str, message: &str) -> Result<()> {
  let signature = Signature::now("Gitc Test User", "gitc-test@example.com")?;
  commit_with_signatures(repo, file_name, content, message, &signature, &signature)
}

/// Helper function to create a commit with an explicit unix timestamp for
/// both the author and the committer
pub fn create_commit_at(repo: &Repository, file_name: &str, content: &str, message: &str, unix_time: i64) -> Result<()> {
  let time = Time::new(unix_time, 0);
  let signature = Signature::new("Gitc Test User", "gitc-test@example.com", &time)?;
  commit_with_signatures(repo, file_name, content, message, &signature, &signature)
}

fn commit_with_signatures(
  repo: &Repository,
  file_name: &str,
  content: &str,
  message: &str,
  author: &Signature,
  committer: &Signature,
) -> Result<()> {
  // Create a file
  let repo_path = repo.path().parent().expect("repository should have a work dir");
  let file_path = repo_path.join(file_name);
  fs::write(&file_path, content)?;

  // Stage the file
  let mut index = repo.index()?;
  index.add_path(Path::new(file_name))?;
  index.write()?;

  // Create a commit
  let tree_id = index.write_tree()?;
  let tree = repo.find_tree(tree_id)?;

  // Handle parent commits
  if let Ok(head) = repo.head() {
    if let Ok(parent) = head.peel_to_commit() {
      repo.commit(Some("HEAD"), author, committer, message, &tree, &[&parent])?;
    } else {
      repo.commit(Some("HEAD"), author, committer, message, &tree, &[])?;
    }
  } else {
    repo.commit(Some("HEAD"), author, committer, message, &tree, &[])?;
  }

  Ok(())
}

/// Helper function to create a branch in a repository
pub fn create_branch(repo: &Repository, branch_name: &str, start_point: Option<&str>) -> Result<()> {
  let head = if let Some(start) = start_point {
    repo
      .find_branch(start, BranchType::Local)?
      .into_reference()
      .peel_to_commit()?
  } else {
    repo.head()?.peel_to_commit()?
  };

  repo.branch(branch_name, &head, false)?;
  Ok(())
}

/// Helper function to checkout a branch
pub fn checkout_branch(repo: &Repository, branch_name: &str) -> Result<()> {
  let obj = repo
    .revparse_single(&format!("refs/heads/{branch_name}"))?
    .peel_to_commit()?;

  repo.checkout_tree(&obj.into_object(), None)?;
  repo.set_head(&format!("refs/heads/{branch_name}"))?;

  Ok(())
}

/// Helper function to check if a branch exists
pub fn branch_exists(repo: &Repository, branch_name: &str) -> bool {
  repo.find_branch(branch_name, BranchType::Local).is_ok()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_guard_creates_repository() {
    let guard = GitRepoTestGuard::new();
    assert!(guard.path().join(".git").exists());
  }

  #[test]
  fn test_backdated_commit_carries_timestamp() {
    let guard = GitRepoTestGuard::new();
    create_commit_at(&guard.repo, "a.txt", "a", "initial", 1_600_000_000).expect("commit should succeed");

    let head = guard.repo.head().expect("HEAD should exist");
    let commit = head.peel_to_commit().expect("HEAD should point at a commit");
    assert_eq!(commit.author().when().seconds(), 1_600_000_000);
    assert_eq!(commit.committer().when().seconds(), 1_600_000_000);
  }
}
