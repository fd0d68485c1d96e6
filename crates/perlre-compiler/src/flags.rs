//! Literal flags and their translation to the engine's inline syntax.
//!
//! `g` and `x` are handled by this crate and the executor; `i`, `m` and `s`
//! become an inline group such as `(?ims)` in front of the pattern.

use std::fmt;

use serde::Serialize;

use crate::diagnostics::{DiagnosticKind, Diagnostics};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Flags {
    /// `g`: all non-overlapping matches instead of the first.
    pub global: bool,
    /// `i`: case-insensitive matching.
    pub ignore_case: bool,
    /// `m`: `^` and `$` match at line boundaries.
    pub multi_line: bool,
    /// `s`: `.` matches `\n`.
    pub dot_matches_new_line: bool,
    /// `x`: free-spacing pattern with `#` comments.
    pub extended: bool,
}

impl Flags {
    /// Parse a raw flags segment.
    ///
    /// Whitespace is skipped and `#` comments out the rest of the line, so an
    /// extended literal can be documented past its closing delimiter.
    /// Unknown characters are ignored with a warning. `offset` is the byte
    /// position of the segment inside the literal, used for diagnostics.
    pub fn parse(segment: &str, offset: usize, diag: &mut Diagnostics) -> Self {
        let mut flags = Flags::default();
        let mut in_comment = false;

        for (i, c) in segment.char_indices() {
            if in_comment {
                in_comment = c != '\n';
                continue;
            }

            match c {
                'g' => flags.global = true,
                'i' => flags.ignore_case = true,
                'm' => flags.multi_line = true,
                's' => flags.dot_matches_new_line = true,
                'x' => flags.extended = true,
                '#' => in_comment = true,
                c if c.is_whitespace() => {}
                c => {
                    let start = offset + i;
                    diag.report(DiagnosticKind::UnknownFlag, start..start + c.len_utf8())
                        .message(c.to_string())
                        .emit();
                }
            }
        }

        flags
    }

    /// Inline-modifier group for the flags the engine understands, if any.
    pub fn native_prefix(&self) -> Option<String> {
        let mut modifiers = String::with_capacity(3);
        if self.ignore_case {
            modifiers.push('i');
        }
        if self.multi_line {
            modifiers.push('m');
        }
        if self.dot_matches_new_line {
            modifiers.push('s');
        }

        if modifiers.is_empty() {
            None
        } else {
            Some(format!("(?{modifiers})"))
        }
    }

    /// Prefix `pattern` with the engine flags.
    pub fn apply_native(&self, pattern: &str) -> String {
        match self.native_prefix() {
            Some(prefix) => format!("{prefix}{pattern}"),
            None => pattern.to_string(),
        }
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set = [
            (self.global, 'g'),
            (self.ignore_case, 'i'),
            (self.multi_line, 'm'),
            (self.dot_matches_new_line, 's'),
            (self.extended, 'x'),
        ];
        for (on, c) in set {
            if on {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
