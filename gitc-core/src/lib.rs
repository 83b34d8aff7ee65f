//! # Gitc Core Library
//!
//! Core library for the gitc command-line tool. Provides the git subprocess
//! layer, the ref catalog loader, glob/regex pattern matching, age-expression
//! parsing, the stale-branch classifier, and the commit-search selector. All
//! repository access goes through blocking `git` subprocesses; nothing in this
//! crate links libgit2 or keeps state between invocations.

pub mod age;
pub mod catalog;
pub mod consts;
pub mod error;
pub mod git;
pub mod output;
pub mod pattern;
pub mod resolve;
pub mod search;

// Re-export the types most callers need
pub use age::parse_age;
pub use catalog::{RefRecord, RefScope, load_refs};
pub use error::GitcError;
pub use git::{cherry_pick, current_branch, delete_branch, ensure_git_repo, run_git};
pub use output::{ColorMode, print_error, print_warning};
pub use pattern::PatternMatcher;
pub use resolve::{StaleReport, classify_stale, find_stale_branches, resolve_branches, stale_matcher};
pub use search::{CommitHit, parse_log_rows, pick_by_index};
