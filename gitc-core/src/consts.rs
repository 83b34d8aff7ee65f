//! Constants for gitc
//!
//! This module defines the static values shared across the gitc crates:
//! the git executable name, the default protected branches, and display
//! formats.

/// Platform-specific Git executable name
#[cfg(windows)]
#[cfg_attr(not(windows), allow(dead_code))]
pub const GIT_EXECUTABLE: &str = "git.exe";

/// Platform-specific Git executable name
#[cfg(not(windows))]
#[cfg_attr(windows, allow(dead_code))]
pub const GIT_EXECUTABLE: &str = "git";

/// Branches that are never considered stale and never deleted, regardless of
/// age or `--keep` contents
pub const PROTECTED_BRANCHES: [&str; 4] = ["main", "master", "develop", "dev"];

/// Date format used for last-commit columns in stale output
pub const SHORT_DATE_FMT: &str = "%Y-%m-%d";
