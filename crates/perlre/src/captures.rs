//! Flattening engine submatches into result fields.

use indexmap::IndexMap;
use regex_automata::PatternID;
use regex_automata::util::captures::{Captures, GroupInfo};

/// Accumulates groups across the matches of one call.
pub struct CaptureSink<'n> {
    groups_per_match: usize,
    names: Vec<Option<&'n str>>,
    collect_named: bool,
    groups: Vec<String>,
    named: IndexMap<String, String>,
}

impl<'n> CaptureSink<'n> {
    /// `names[i]` is the name of group `i` (group 0 is the whole match).
    pub fn new(names: Vec<Option<&'n str>>, collect_named: bool, matches: usize) -> Self {
        let groups_per_match = names.len().saturating_sub(1);
        Self {
            groups_per_match,
            names,
            collect_named,
            groups: vec![String::new(); matches * groups_per_match + 1],
            named: IndexMap::new(),
        }
    }

    /// Record the groups of match number `iteration` (0-based).
    ///
    /// Group `j` lands at `iteration * groups_per_match + j`. A named group
    /// overwrites the previous value for its name unless it is empty.
    pub fn record(&mut self, haystack: &str, caps: &Captures, iteration: usize) {
        let base = iteration * self.groups_per_match;
        let needed = base + self.groups_per_match + 1;
        if self.groups.len() < needed {
            self.groups.resize(needed, String::new());
        }

        for j in 1..=self.groups_per_match {
            let Some(span) = caps.get_group(j) else {
                continue;
            };
            let value = &haystack[span.range()];
            self.groups[base + j] = value.to_string();

            if self.collect_named
                && !value.is_empty()
                && let Some(Some(name)) = self.names.get(j)
            {
                self.named.insert((*name).to_string(), value.to_string());
            }
        }
    }

    pub fn finish(self) -> (Vec<String>, Option<IndexMap<String, String>>) {
        let named = self.collect_named.then_some(self.named);
        (self.groups, named)
    }
}

/// Group names of the literal's single pattern, indexed by group.
pub fn group_names(info: &GroupInfo) -> Vec<Option<&str>> {
    info.pattern_names(PatternID::ZERO).collect()
}
