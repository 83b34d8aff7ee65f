//! # Age Expressions
//!
//! Parses cutoff durations like `30d`, `12w`, `6m`, `1y`. Units map to fixed
//! day multiples (1/7/30/365), calendar-approximate on purpose: `6m` is
//! always 180 days, regardless of which months the window spans.

use std::sync::LazyLock;

use chrono::Duration;
use regex::Regex;

use crate::error::GitcError;

static AGE_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^\s*(\d+)\s*([dwmy])\s*$").expect("Failed to compile age expression regex"));

/// Parse an age expression into a duration. Surrounding whitespace is
/// tolerated and the unit is case-insensitive.
pub fn parse_age(expr: &str) -> Result<Duration, GitcError> {
  let lowered = expr.to_lowercase();
  let caps = AGE_PATTERN
    .captures(&lowered)
    .ok_or_else(|| GitcError::InvalidAgeFormat(expr.to_string()))?;
  let count: i64 = caps[1]
    .parse()
    .map_err(|_| GitcError::InvalidAgeFormat(expr.to_string()))?;
  let days_per_unit: i64 = match &caps[2] {
    "d" => 1,
    "w" => 7,
    "m" => 30,
    "y" => 365,
    _ => return Err(GitcError::InvalidAgeFormat(expr.to_string())),
  };
  // Absurdly large counts overflow the multiply or chrono's duration range;
  // both are rejected as malformed rather than panicking.
  count
    .checked_mul(days_per_unit)
    .and_then(Duration::try_days)
    .ok_or_else(|| GitcError::InvalidAgeFormat(expr.to_string()))
}
