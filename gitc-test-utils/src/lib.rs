//! Test utilities shared across the gitc workspace
//!
//! Provides a temporary git repository guard plus helpers for building
//! branch/commit fixtures, including commits with explicit (backdated)
//! author and committer timestamps for staleness tests.
//!
//! The clippy dead_code lint is disabled for this crate because test
//! utilities may not be used by all tests, and the compiler cannot detect
//! usage across crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod git;

// Re-export commonly used items
pub use git::{GitRepoTestGuard, checkout_branch, create_branch, create_commit, create_commit_at};
