//! Running compiled literals against host strings.
//!
//! Matching and substitution both come in a single (first match) and a
//! global (`g` flag) flavor. Capture extraction is skipped when the pattern
//! has no capturing groups.

use indexmap::IndexMap;
use perlre_compiler::CompiledLiteral;
use regex_automata::util::captures::Captures;

use crate::captures::{CaptureSink, group_names};
use crate::result::MatchResult;

type CaptureFields = (Option<Vec<String>>, Option<IndexMap<String, String>>);

/// Match `haystack`, honoring the literal's global flag.
pub fn run_match(lit: &CompiledLiteral, haystack: &str) -> MatchResult {
    let re = lit.regex();

    if !lit.is_global() {
        let Some(caps) = first_match(lit, haystack) else {
            return MatchResult::default();
        };
        let (groups, named) = capture_fields(lit, haystack, std::slice::from_ref(&caps));
        return MatchResult {
            match_count: 1,
            groups,
            named,
            substituted: None,
        };
    }

    if !wants_captures(lit) {
        return MatchResult {
            match_count: re.find_iter(haystack).count(),
            ..MatchResult::default()
        };
    }

    let all: Vec<Captures> = re.captures_iter(haystack).collect();
    if all.is_empty() {
        return MatchResult::default();
    }

    let (groups, named) = capture_fields(lit, haystack, &all);
    MatchResult {
        match_count: all.len(),
        groups,
        named,
        substituted: None,
    }
}

/// Substitute in `haystack`, honoring the literal's global flag.
///
/// `substituted` is always set; it equals the input when nothing matched.
pub fn run_substitute(lit: &CompiledLiteral, haystack: &str) -> MatchResult {
    if !lit.is_global() {
        let Some(caps) = first_match(lit, haystack) else {
            return unchanged(haystack);
        };
        let (groups, named) = capture_fields(lit, haystack, std::slice::from_ref(&caps));
        return MatchResult {
            match_count: 1,
            groups,
            named,
            substituted: Some(replace_all(haystack, lit.replacement(), std::slice::from_ref(&caps))),
        };
    }

    let all: Vec<Captures> = lit.regex().captures_iter(haystack).collect();
    if all.is_empty() {
        return unchanged(haystack);
    }

    let (groups, named) = capture_fields(lit, haystack, &all);
    MatchResult {
        match_count: all.len(),
        groups,
        named,
        substituted: Some(replace_all(haystack, lit.replacement(), &all)),
    }
}

fn first_match(lit: &CompiledLiteral, haystack: &str) -> Option<Captures> {
    let re = lit.regex();
    let mut caps = re.create_captures();
    re.captures(haystack, &mut caps);
    caps.is_match().then_some(caps)
}

fn unchanged(haystack: &str) -> MatchResult {
    MatchResult {
        substituted: Some(haystack.to_string()),
        ..MatchResult::default()
    }
}

fn wants_captures(lit: &CompiledLiteral) -> bool {
    lit.has_captures() && lit.group_count() > 0
}

fn capture_fields(lit: &CompiledLiteral, haystack: &str, matches: &[Captures]) -> CaptureFields {
    if !wants_captures(lit) {
        return (None, None);
    }

    let names = group_names(lit.regex().group_info());
    let collect_named = lit.has_named_captures() && names.iter().any(Option::is_some);

    let mut sink = CaptureSink::new(names, collect_named, matches.len());
    for (iteration, caps) in matches.iter().enumerate() {
        sink.record(haystack, caps, iteration);
    }
    let (groups, named) = sink.finish();
    (Some(groups), named)
}

/// Splice the expanded template over every match span, in order.
///
/// Templates use `$1`, `$name` and `${name}`; `$$` is a literal `$`.
fn replace_all(haystack: &str, template: &str, matches: &[Captures]) -> String {
    let mut out = String::with_capacity(haystack.len());
    let mut last = 0;

    for caps in matches {
        let Some(m) = caps.get_match() else {
            continue;
        };
        out.push_str(&haystack[last..m.start()]);
        caps.interpolate_string_into(haystack, template, &mut out);
        last = m.end();
    }

    out.push_str(&haystack[last..]);
    out
}
