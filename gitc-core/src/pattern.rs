//! # Pattern Matching
//!
//! A single matcher abstraction over ref names, built either from a verbatim
//! regex or from a comma-separated list of shell globs translated into one
//! alternation. Matching always tries both a full match and a substring
//! search; a hit on either accepts the name. Callers construct the matcher
//! once and never branch on the source mode again.

use regex::Regex;

use crate::error::GitcError;

/// Compiled matcher over ref names.
#[derive(Debug)]
pub struct PatternMatcher {
  full: Regex,
  search: Regex,
}

impl PatternMatcher {
  /// Compile `pattern` as a verbatim regex (`is_regex`) or as a
  /// comma-separated glob list. An empty glob list matches everything.
  pub fn new(pattern: &str, is_regex: bool) -> Result<Self, GitcError> {
    let source = if is_regex {
      pattern.to_string()
    } else {
      globs_to_regex(pattern)
    };
    let search = Regex::new(&source)?;
    let full = Regex::new(&format!("^(?:{source})$"))?;
    Ok(Self { full, search })
  }

  /// True when the pattern covers `name` entirely or occurs anywhere in it.
  pub fn matches(&self, name: &str) -> bool {
    self.full.is_match(name) || self.search.is_match(name)
  }
}

/// Translate a comma-separated glob list into a regex alternation. Entries
/// are trimmed, empties dropped; an empty list becomes match-everything.
fn globs_to_regex(pattern: &str) -> String {
  let parts: Vec<String> = pattern
    .split(',')
    .map(str::trim)
    .filter(|g| !g.is_empty())
    .map(translate_glob)
    .collect();
  if parts.is_empty() { ".*".to_string() } else { parts.join("|") }
}

/// Translate one shell-style glob (`*`, `?`, `[...]` classes) into a
/// self-contained regex fragment, safe to join with `|`.
fn translate_glob(glob: &str) -> String {
  let chars: Vec<char> = glob.chars().collect();
  let mut out = String::from("(?s:");
  let mut i = 0;
  while i < chars.len() {
    let c = chars[i];
    i += 1;
    match c {
      '*' => out.push_str(".*"),
      '?' => out.push('.'),
      '[' => {
        // Scan for the closing bracket; `]` directly after `[` or `[!` is a
        // literal member of the class.
        let mut j = i;
        if j < chars.len() && chars[j] == '!' {
          j += 1;
        }
        if j < chars.len() && chars[j] == ']' {
          j += 1;
        }
        while j < chars.len() && chars[j] != ']' {
          j += 1;
        }
        if j >= chars.len() {
          // Unterminated class: treat the bracket as a literal
          out.push_str("\\[");
        } else {
          let inner: String = chars[i..j].iter().collect::<String>().replace('\\', "\\\\");
          out.push('[');
          if let Some(rest) = inner.strip_prefix('!') {
            out.push('^');
            out.push_str(rest);
          } else if inner.starts_with('^') {
            out.push('\\');
            out.push_str(&inner);
          } else {
            out.push_str(&inner);
          }
          out.push(']');
          i = j + 1;
        }
      }
      _ => out.push_str(&regex::escape(&c.to_string())),
    }
  }
  out.push(')');
  out
}
