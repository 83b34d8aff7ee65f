//! Integration tests for the staleness workflow: classification over a real
//! repository plus the per-branch delete and cherry-pick collaborators.

use anyhow::Result;
use chrono::{Duration, Utc};
use gitc_core::git::{LogOptions, log_commits};
use gitc_core::{GitcError, cherry_pick, current_branch, delete_branch, find_stale_branches, parse_log_rows};
use gitc_test_utils::git::branch_exists;
use gitc_test_utils::{GitRepoTestGuard, checkout_branch, create_branch, create_commit, create_commit_at};

fn days_ago(days: i64) -> i64 {
  (Utc::now() - Duration::days(days)).timestamp()
}

#[test]
fn test_old_branch_is_stale_and_deletable() -> Result<()> {
  let guard = GitRepoTestGuard::new();
  create_commit_at(&guard.repo, "a.txt", "a", "initial", days_ago(200))?;
  create_branch(&guard.repo, "old-feature", None)?;

  let report = find_stale_branches(guard.path(), "30d", false, "", false)?;
  let names: Vec<&str> = report.stale.iter().map(|r| r.name.as_str()).collect();
  assert_eq!(names, vec!["old-feature"]);
  assert_eq!(report.delete_candidates, vec!["old-feature"]);
  Ok(())
}

#[test]
fn test_default_branch_is_protected_despite_age() -> Result<()> {
  let guard = GitRepoTestGuard::new();
  create_commit_at(&guard.repo, "a.txt", "a", "initial", days_ago(2000))?;

  // Only the default branch (main or master, both protected) exists
  let report = find_stale_branches(guard.path(), "1d", false, "", false)?;
  assert!(report.stale.is_empty());
  Ok(())
}

#[test]
fn test_current_branch_is_never_a_candidate() -> Result<()> {
  let guard = GitRepoTestGuard::new();
  create_commit_at(&guard.repo, "a.txt", "a", "initial", days_ago(200))?;
  create_branch(&guard.repo, "wip-archeology", None)?;
  checkout_branch(&guard.repo, "wip-archeology")?;

  assert_eq!(current_branch(guard.path()).as_deref(), Some("wip-archeology"));

  let report = find_stale_branches(guard.path(), "30d", false, "", false)?;
  assert!(report.stale.is_empty());
  assert!(report.delete_candidates.is_empty());
  Ok(())
}

#[test]
fn test_keep_list_shields_branch() -> Result<()> {
  let guard = GitRepoTestGuard::new();
  create_commit_at(&guard.repo, "a.txt", "a", "initial", days_ago(200))?;
  create_branch(&guard.repo, "keep-me", None)?;
  create_branch(&guard.repo, "drop-me", None)?;

  let report = find_stale_branches(guard.path(), "30d", false, "keep-me", false)?;
  let names: Vec<&str> = report.stale.iter().map(|r| r.name.as_str()).collect();
  assert_eq!(names, vec!["drop-me"]);
  Ok(())
}

#[test]
fn test_fresh_branch_is_not_stale() -> Result<()> {
  let guard = GitRepoTestGuard::new();
  create_commit(&guard.repo, "a.txt", "a", "initial")?;
  create_branch(&guard.repo, "fresh-work", None)?;

  let report = find_stale_branches(guard.path(), "30d", false, "", false)?;
  assert!(report.stale.is_empty());
  Ok(())
}

#[test]
fn test_invalid_age_expression_fails_before_loading() {
  let guard = GitRepoTestGuard::new();
  create_commit(&guard.repo, "a.txt", "a", "initial").expect("commit should succeed");

  let err = find_stale_branches(guard.path(), "12weeks", false, "", false).expect_err("bad age should fail");
  assert!(matches!(err, GitcError::InvalidAgeFormat(_)));
}

#[test]
fn test_delete_branch_merged_and_forced() -> Result<()> {
  let guard = GitRepoTestGuard::new();
  create_commit(&guard.repo, "a.txt", "a", "initial")?;
  create_branch(&guard.repo, "merged-branch", None)?;

  // Same tip as the current branch, so a plain -d succeeds
  let out = delete_branch(guard.path(), "merged-branch", false)?;
  assert!(out.success, "expected deletion to succeed: {}", out.message());
  assert!(!branch_exists(&guard.repo, "merged-branch"));

  // An unmerged branch is refused by -d but removed by -D
  create_branch(&guard.repo, "unmerged-branch", None)?;
  checkout_branch(&guard.repo, "unmerged-branch")?;
  create_commit(&guard.repo, "b.txt", "b", "diverge")?;
  let default = current_branch(guard.path()).expect("should be on unmerged-branch");
  assert_eq!(default, "unmerged-branch");
  // Move back so the branch is not checked out
  let head_names: Vec<String> = guard
    .repo
    .branches(Some(git2::BranchType::Local))?
    .filter_map(|b| b.ok().and_then(|(branch, _)| branch.name().ok().flatten().map(String::from)))
    .filter(|name| name != "unmerged-branch")
    .collect();
  let base = head_names.first().expect("default branch should exist");
  checkout_branch(&guard.repo, base)?;

  let out = delete_branch(guard.path(), "unmerged-branch", false)?;
  assert!(!out.success, "plain -d should refuse an unmerged branch");
  assert!(branch_exists(&guard.repo, "unmerged-branch"));

  let out = delete_branch(guard.path(), "unmerged-branch", true)?;
  assert!(out.success, "-D should remove the branch: {}", out.message());
  assert!(!branch_exists(&guard.repo, "unmerged-branch"));
  Ok(())
}

#[test]
fn test_log_search_and_cherry_pick_roundtrip() -> Result<()> {
  let guard = GitRepoTestGuard::new();
  create_commit(&guard.repo, "a.txt", "a", "initial")?;
  let base = current_branch(guard.path()).expect("should be on the default branch");

  create_branch(&guard.repo, "side", None)?;
  checkout_branch(&guard.repo, "side")?;
  create_commit(&guard.repo, "dialog.txt", "v2", "Restore dialog after crash")?;
  checkout_branch(&guard.repo, &base)?;

  let opts = LogOptions {
    all: true,
    grep: Some("restore dialog"),
    ignore_case: true,
    ..Default::default()
  };
  let out = log_commits(guard.path(), None, &opts)?;
  assert!(out.success, "{}", out.message());
  let hits = parse_log_rows(&out.stdout);
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].subject, "Restore dialog after crash");

  let result = cherry_pick(guard.path(), &hits[0].hash)?;
  assert!(result.success, "cherry-pick should apply cleanly: {}", result.message());
  assert!(guard.path().join("dialog.txt").exists());
  Ok(())
}
