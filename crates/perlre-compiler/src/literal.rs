//! Splitting a literal into its mode, delimiter and segments.
//!
//! Accepted shape: `<prefix><delim><pattern><delim>[<replacement><delim>]<flags>`
//! where the prefix is `m`, `s`, `t`, `tr` or absent (implicit match).

use serde::Serialize;

use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Operation encoded by the literal's prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Match,
    Substitute,
    Transliterate,
}

impl Mode {
    /// Whether the literal carries a second segment before its flags.
    pub fn has_replacement(&self) -> bool {
        !matches!(self, Mode::Match)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Match => write!(f, "match"),
            Mode::Substitute => write!(f, "substitute"),
            Mode::Transliterate => write!(f, "transliterate"),
        }
    }
}

/// The raw segments of a literal, before any flag processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    pub mode: Mode,
    pub delimiter: char,
    pub pattern: String,
    pub replacement: String,
    pub flags: String,
    /// Byte offset of the flags segment in the literal.
    pub flags_offset: usize,
    pub has_captures: bool,
    pub has_named_captures: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Pattern,
    Replacement,
    Flags,
}

/// Split `source` into segments in a single scan.
///
/// Anomalies are reported into `diag`. Returns `None` only when there is
/// nothing to split: an empty literal or a prefix without a delimiter.
pub fn split_literal(source: &str, diag: &mut Diagnostics) -> Option<Segments> {
    let Some((mode, prefix_len)) = detect_mode(source) else {
        diag.report(DiagnosticKind::EmptyLiteral, 0..0).emit();
        return None;
    };

    let Some(delimiter) = source[prefix_len..].chars().next() else {
        diag.report(DiagnosticKind::MissingDelimiter, 0..prefix_len)
            .emit();
        return None;
    };

    let body_start = prefix_len + delimiter.len_utf8();
    let body = &source[body_start..];

    let mut segments = Segments {
        mode,
        delimiter,
        pattern: String::with_capacity(body.len()),
        replacement: String::new(),
        flags: String::new(),
        flags_offset: source.len(),
        has_captures: false,
        has_named_captures: false,
    };

    let mut cursor = Cursor::Pattern;
    let mut chars = body.char_indices();
    let mut closed = false;

    while let Some((i, c)) = chars.next() {
        closed = c == delimiter;
        if c == delimiter {
            match cursor {
                Cursor::Pattern if mode.has_replacement() => cursor = Cursor::Replacement,
                Cursor::Pattern | Cursor::Replacement => {
                    cursor = Cursor::Flags;
                    segments.flags_offset = body_start + i + c.len_utf8();
                }
                Cursor::Flags => {
                    let at = body_start + i;
                    diag.report(DiagnosticKind::DelimiterAfterFlags, at..at + c.len_utf8())
                        .message(c.to_string())
                        .emit();
                }
            }
            continue;
        }

        if c == '\\' {
            // Escape and escaped character travel together.
            let escaped = chars.next().map(|(_, e)| e);
            push_escaped(&mut segments, cursor, escaped);
            continue;
        }

        match cursor {
            Cursor::Pattern => {
                if c == '(' {
                    detect_group(&mut segments, &body[i + 1..]);
                }
                segments.pattern.push(c);
            }
            Cursor::Replacement => segments.replacement.push(c),
            Cursor::Flags => segments.flags.push(c),
        }
    }

    // An escaped delimiter at the very end does not close the literal.
    if cursor != Cursor::Flags && !closed {
        diag.report(DiagnosticKind::UnterminatedLiteral, prefix_len..source.len())
            .message(delimiter.to_string())
            .emit();
    }

    Some(segments)
}

/// Mode and prefix length in bytes. `None` for an empty literal.
fn detect_mode(source: &str) -> Option<(Mode, usize)> {
    let mut chars = source.chars();
    let first = chars.next()?;

    Some(match first {
        'm' => (Mode::Match, 1),
        's' => (Mode::Substitute, 1),
        't' if chars.next() == Some('r') => (Mode::Transliterate, 2),
        't' => (Mode::Transliterate, 1),
        _ => (Mode::Match, 0),
    })
}

fn push_escaped(segments: &mut Segments, cursor: Cursor, escaped: Option<char>) {
    let delimiter = segments.delimiter;
    let target = match cursor {
        Cursor::Pattern => &mut segments.pattern,
        Cursor::Replacement => &mut segments.replacement,
        Cursor::Flags => &mut segments.flags,
    };

    let Some(escaped) = escaped else {
        target.push('\\');
        return;
    };

    let keep_backslash = match cursor {
        // The engine rejects escapes like `\<` or `\§`; the delimiter is literal anyway.
        Cursor::Pattern => {
            escaped != delimiter || regex_syntax::is_escapeable_character(escaped)
        }
        // Templates have no backslash escapes.
        Cursor::Replacement => escaped != delimiter,
        Cursor::Flags => true,
    };

    if keep_backslash {
        target.push('\\');
    }
    target.push(escaped);
}

/// Classify the group opened by a `(` whose following text is `rest`.
fn detect_group(segments: &mut Segments, rest: &str) {
    let Some(after_question) = rest.strip_prefix('?') else {
        segments.has_captures = true;
        return;
    };

    let named = after_question.starts_with("P<")
        || (after_question.starts_with('<')
            && !after_question.starts_with("<=")
            && !after_question.starts_with("<!"));

    if named {
        segments.has_captures = true;
        segments.has_named_captures = true;
    }
}
