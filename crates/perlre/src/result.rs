//! Per-call match and substitution results.

use indexmap::IndexMap;
use serde::Serialize;

/// Outcome of one match or substitution call.
///
/// `groups` mirrors 1-based group numbering: index 0 is always empty. With
/// the global flag, the groups of every match are concatenated in order.
/// Both capture fields are `None` (not empty) when the pattern declares no
/// such groups or nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub match_count: usize,
    pub groups: Option<Vec<String>>,
    pub named: Option<IndexMap<String, String>>,
    /// Host string after replacement. Only set by substitution.
    pub substituted: Option<String>,
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        self.match_count > 0
    }

    /// Captured text of flat group `index`, counting across matches.
    pub fn group(&self, index: usize) -> Option<&str> {
        self.groups.as_ref()?.get(index).map(String::as_str)
    }

    /// Last non-empty value captured under `name`.
    pub fn named(&self, name: &str) -> Option<&str> {
        self.named.as_ref()?.get(name).map(String::as_str)
    }
}
