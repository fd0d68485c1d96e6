//! perlre compiler: literal parser, flag processing, and engine compilation.
//!
//! This crate turns Perl-style literals such as `m/(a.)/g` or
//! `s!from!to!gi` into a [`CompiledLiteral`]:
//! - `literal` - mode detection and segment splitting
//! - `flags` - flag parsing and native inline-flag composition
//! - `extended` - free-spacing (`x`) stripping
//! - `compile` - feature validation and `regex-automata` compilation
//! - `diagnostics` - anomaly reporting
//!
//! # Example
//!
//! ```
//! use perlre_compiler::{Mode, ParsePolicy, compile_literal};
//!
//! let lit = compile_literal(r"s/a\/b/c/g", ParsePolicy::Strict).unwrap();
//! assert_eq!(lit.mode(), Mode::Substitute);
//! assert_eq!(lit.replacement(), "c");
//! assert!(lit.is_global());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compile;
pub mod diagnostics;
pub mod extended;
pub mod flags;
pub mod literal;

#[cfg(test)]
mod compile_tests;
#[cfg(test)]
mod extended_tests;
#[cfg(test)]
mod flags_tests;

pub use compile::{CompiledLiteral, ParsePolicy, compile_literal};
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use extended::strip_extended;
pub use flags::Flags;
pub use literal::{Mode, Segments, split_literal};

/// Regex features the linear-time engine cannot provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedFeature {
    Backreference,
    LookAround,
}

impl std::fmt::Display for UnsupportedFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnsupportedFeature::Backreference => write!(f, "backreferences"),
            UnsupportedFeature::LookAround => write!(f, "look-around"),
        }
    }
}

/// Errors that can occur while parsing or compiling a literal.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The literal's structure is broken (see the diagnostics).
    #[error("malformed literal `{literal}`: {diagnostics}")]
    MalformedLiteral {
        literal: String,
        diagnostics: Diagnostics,
    },

    /// The engine rejected the assembled pattern.
    #[error("pattern `{pattern}` failed to compile: {message}")]
    PatternCompile { pattern: String, message: String },

    #[error("pattern `{pattern}` uses {feature}, which the engine does not support")]
    UnsupportedFeature {
        pattern: String,
        feature: UnsupportedFeature,
    },
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, Error>;
