//! perlre: Perl-style regex literals for Rust strings.
//!
//! Write `m/pattern/flags` and `s/pattern/replacement/flags` as plain
//! strings and evaluate them with `regex-automata`:
//!
//! ```
//! use perlre::Engine;
//!
//! let engine = Engine::new();
//! let r = engine.match_detailed("a1 a2", r"m/(?P<d>\d)/g").unwrap();
//! assert_eq!(r.match_count, 2);
//! assert_eq!(r.named("d"), Some("2"));
//!
//! let s = engine.substitute_to_string("kalle/ankka", r"s/\///").unwrap();
//! assert_eq!(s, "kalleankka");
//! ```
//!
//! Supported flags are `g`, `i`, `m`, `s` and `x`. The engine runs in
//! linear time, so backreferences and look-around are rejected when the
//! literal is compiled.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod cache;
pub mod captures;
pub mod engine;
pub mod exec;
pub mod result;


pub use cache::LiteralCache;
pub use engine::Engine;
pub use result::MatchResult;

pub use perlre_compiler::{
    CompiledLiteral, DiagnosticKind, Diagnostics, Flags, Mode, ParsePolicy, UnsupportedFeature,
};

/// Errors returned by [`Engine`] operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] perlre_compiler::Error),

    #[error("`{literal}` is a {found} literal, expected {expected}")]
    ModeMismatch {
        literal: String,
        expected: Mode,
        found: Mode,
    },

    #[error("{mode} literals cannot be executed: `{literal}`")]
    UnsupportedMode { literal: String, mode: Mode },
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
