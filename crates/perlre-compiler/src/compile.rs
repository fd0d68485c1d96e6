//! From literal text to a compiled engine regex.
//!
//! Pipeline: split → flags → extended stripping → feature validation →
//! native flag prefix → `regex_automata::meta::Regex`.

use regex_automata::PatternID;
use regex_automata::meta::Regex;
use regex_syntax::ast;

use crate::diagnostics::Diagnostics;
use crate::extended::strip_extended;
use crate::flags::Flags;
use crate::literal::{Mode, split_literal};
use crate::{Error, Result, UnsupportedFeature};

/// How anomalies in a literal's structure are treated.
///
/// Empty literals and literals without a delimiter fail under either policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Error diagnostics fail the parse with [`Error::MalformedLiteral`].
    #[default]
    Strict,
    /// Error diagnostics are logged and kept on the compiled literal; the
    /// best-effort parse continues.
    Lenient,
}

/// A parsed literal together with its compiled engine regex.
///
/// Immutable once built. Match results are returned separately by the
/// executor and are never stored here.
#[derive(Debug, Clone)]
pub struct CompiledLiteral {
    original: String,
    mode: Mode,
    delimiter: char,
    pattern: String,
    replacement: String,
    flags: String,
    parsed_flags: Flags,
    has_captures: bool,
    has_named_captures: bool,
    regex: Regex,
    diagnostics: Diagnostics,
}

impl CompiledLiteral {
    /// The literal exactly as supplied.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Pattern after extended stripping, without the native flag prefix.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Replacement template; empty unless the literal has a second segment.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// The flags segment as written.
    pub fn flags(&self) -> &str {
        &self.flags
    }

    pub fn parsed_flags(&self) -> Flags {
        self.parsed_flags
    }

    pub fn is_global(&self) -> bool {
        self.parsed_flags.global
    }

    pub fn has_captures(&self) -> bool {
        self.has_captures
    }

    pub fn has_named_captures(&self) -> bool {
        self.has_named_captures
    }

    /// The pattern handed to the engine, native flags included.
    pub fn engine_pattern(&self) -> String {
        self.parsed_flags.apply_native(&self.pattern)
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Number of groups per match, excluding the implicit whole-match group.
    pub fn group_count(&self) -> usize {
        self.regex
            .group_info()
            .group_len(PatternID::ZERO)
            .saturating_sub(1)
    }

    /// Non-fatal anomalies found while parsing.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Stable multi-line description, one field per line.
    pub fn dump(&self) -> String {
        let captures = match (self.has_captures, self.has_named_captures) {
            (_, true) => "named",
            (true, false) => "positional",
            (false, false) => "none",
        };
        let mut out = String::new();
        out.push_str(&format!("mode: {}\n", self.mode));
        out.push_str(&format!("delimiter: `{}`\n", self.delimiter));
        out.push_str(&format!("pattern: `{}`\n", self.pattern));
        if self.mode.has_replacement() {
            out.push_str(&format!("replacement: `{}`\n", self.replacement));
        }
        out.push_str(&format!("flags: `{}`\n", self.parsed_flags));
        out.push_str(&format!("captures: {captures}\n"));
        out.push_str(&format!("engine: `{}`", self.engine_pattern()));
        out
    }
}

/// Parse and compile `source` into a [`CompiledLiteral`].
pub fn compile_literal(source: &str, policy: ParsePolicy) -> Result<CompiledLiteral> {
    let mut diagnostics = Diagnostics::new();
    let segments = split_literal(source, &mut diagnostics);

    let Some(segments) = segments.filter(|_| !diagnostics.has_fatal()) else {
        return Err(malformed(source, diagnostics));
    };

    let parsed_flags = Flags::parse(&segments.flags, segments.flags_offset, &mut diagnostics);

    if diagnostics.has_errors() && policy == ParsePolicy::Strict {
        return Err(malformed(source, diagnostics));
    }
    for diag in &diagnostics {
        tracing::warn!(target: "perlre::compiler", literal = source, "{diag}");
    }

    let (pattern, replacement) = if parsed_flags.extended {
        (
            strip_extended(&segments.pattern),
            strip_extended(&segments.replacement),
        )
    } else {
        (segments.pattern, segments.replacement)
    };

    validate_features(&pattern)?;

    let engine_pattern = parsed_flags.apply_native(&pattern);
    let regex = Regex::new(&engine_pattern).map_err(|e| Error::PatternCompile {
        message: e
            .syntax_error()
            .map(|s| s.to_string())
            .unwrap_or_else(|| e.to_string()),
        pattern: engine_pattern.clone(),
    })?;

    tracing::debug!(
        target: "perlre::compiler",
        literal = source,
        engine_pattern = %engine_pattern,
        groups = regex.group_info().group_len(PatternID::ZERO),
        "compiled literal"
    );

    Ok(CompiledLiteral {
        original: source.to_string(),
        mode: segments.mode,
        delimiter: segments.delimiter,
        pattern,
        replacement,
        flags: segments.flags,
        parsed_flags,
        has_captures: segments.has_captures,
        has_named_captures: segments.has_named_captures,
        regex,
        diagnostics,
    })
}

fn malformed(source: &str, diagnostics: Diagnostics) -> Error {
    Error::MalformedLiteral {
        literal: source.to_string(),
        diagnostics,
    }
}

/// Reject syntax the engine cannot honor instead of letting it mismatch.
///
/// Octal escapes are disabled so `\1` parses as a backreference. Other
/// syntax errors are left for the engine to report.
fn validate_features(pattern: &str) -> Result<()> {
    let parsed = ast::parse::ParserBuilder::new()
        .octal(false)
        .build()
        .parse(pattern);

    let Err(e) = parsed else {
        return Ok(());
    };

    let feature = match e.kind() {
        ast::ErrorKind::UnsupportedBackreference => UnsupportedFeature::Backreference,
        ast::ErrorKind::UnsupportedLookAround => UnsupportedFeature::LookAround,
        ast::ErrorKind::EscapeUnrecognized if is_backreference_escape(pattern, e.span()) => {
            UnsupportedFeature::Backreference
        }
        _ => return Ok(()),
    };

    Err(Error::UnsupportedFeature {
        pattern: pattern.to_string(),
        feature,
    })
}

/// `\k<name>`, `\k{name}` and `\g1` style references surface as unknown escapes.
fn is_backreference_escape(pattern: &str, span: &ast::Span) -> bool {
    pattern
        .get(span.start.offset..)
        .is_some_and(|rest| rest.starts_with(r"\k") || rest.starts_with(r"\g"))
}
