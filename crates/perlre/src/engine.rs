//! Public entry points: match and substitute with literal strings.

use std::sync::Arc;

use perlre_compiler::{CompiledLiteral, Mode, ParsePolicy, compile_literal};

use crate::cache::LiteralCache;
use crate::exec::{run_match, run_substitute};
use crate::result::MatchResult;
use crate::{Error, Result};

/// Evaluates Perl-style literals, caching their compiled form.
///
/// An `Engine` is `Send + Sync`; share one between threads to share its
/// cache. Every call returns its own result.
///
/// # Example
///
/// ```
/// use perlre::Engine;
///
/// let engine = Engine::new();
/// let result = engine.match_detailed("kalle ankka", "m/(a.)/g").unwrap();
/// assert_eq!(result.groups.unwrap(), ["", "al", "an"]);
///
/// let mut s = String::from("kalle ankka");
/// assert!(engine.substitute(&mut s, "s/a/u/g").unwrap());
/// assert_eq!(s, "kulle unkku");
/// ```
#[derive(Debug, Default)]
pub struct Engine {
    cache: LiteralCache,
    policy: ParsePolicy,
}

impl Engine {
    /// Engine with caching on and strict parsing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the compile cache.
    ///
    /// With caching off every call re-parses and re-compiles its literal.
    pub fn with_caching(self, enabled: bool) -> Self {
        self.cache.set_enabled(enabled);
        self
    }

    /// Set how structural anomalies in literals are treated.
    ///
    /// Entries compiled under a different policy are dropped from the cache.
    pub fn with_policy(mut self, policy: ParsePolicy) -> Self {
        if self.policy != policy {
            self.cache.flush();
        }
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ParsePolicy {
        self.policy
    }

    pub fn cache(&self) -> &LiteralCache {
        &self.cache
    }

    pub fn set_caching_enabled(&self, enabled: bool) {
        self.cache.set_enabled(enabled);
    }

    pub fn flush_cache(&self) {
        self.cache.flush();
    }

    /// Parse and compile `literal`, going through the cache.
    pub fn compile(&self, literal: &str) -> Result<Arc<CompiledLiteral>> {
        let policy = self.policy;
        self.cache
            .get_or_compile(literal, |source| compile_literal(source, policy))
            .map_err(Error::from)
    }

    /// Whether `literal` matches anywhere in `haystack`.
    pub fn is_match(&self, haystack: &str, literal: &str) -> Result<bool> {
        let lit = self.compile(literal)?;
        ensure_matchable(&lit)?;
        Ok(lit.regex().is_match(haystack))
    }

    /// Match count and captures of `literal` against `haystack`.
    pub fn match_detailed(&self, haystack: &str, literal: &str) -> Result<MatchResult> {
        let lit = self.compile(literal)?;
        ensure_matchable(&lit)?;
        Ok(run_match(&lit, haystack))
    }

    /// Apply a substitution literal to `haystack` in place.
    ///
    /// Returns whether anything was replaced.
    pub fn substitute(&self, haystack: &mut String, literal: &str) -> Result<bool> {
        Ok(self.substitute_detailed(haystack, literal)?.is_match())
    }

    /// Like [`substitute`](Self::substitute), returning the full result.
    pub fn substitute_detailed(&self, haystack: &mut String, literal: &str) -> Result<MatchResult> {
        let lit = self.compile(literal)?;
        substitute_in_place(&lit, haystack)
    }

    /// Substituted copy of `haystack`.
    pub fn substitute_to_string(&self, haystack: &str, literal: &str) -> Result<String> {
        let lit = self.compile(literal)?;
        ensure_substitution(&lit)?;
        let result = run_substitute(&lit, haystack);
        Ok(result.substituted.unwrap_or_else(|| haystack.to_string()))
    }

    /// Match or substitute, whichever the literal's prefix asks for.
    pub fn dispatch(&self, haystack: &mut String, literal: &str) -> Result<bool> {
        let lit = self.compile(literal)?;
        match lit.mode() {
            Mode::Substitute => Ok(substitute_in_place(&lit, haystack)?.is_match()),
            Mode::Match => Ok(run_match(&lit, haystack).is_match()),
            Mode::Transliterate => Err(unsupported(&lit)),
        }
    }
}

fn substitute_in_place(lit: &CompiledLiteral, haystack: &mut String) -> Result<MatchResult> {
    ensure_substitution(lit)?;
    let result = run_substitute(lit, haystack);
    if result.is_match()
        && let Some(out) = &result.substituted
    {
        haystack.clone_from(out);
    }
    Ok(result)
}

fn ensure_matchable(lit: &CompiledLiteral) -> Result<()> {
    match lit.mode() {
        Mode::Match | Mode::Substitute => Ok(()),
        Mode::Transliterate => Err(unsupported(lit)),
    }
}

fn ensure_substitution(lit: &CompiledLiteral) -> Result<()> {
    match lit.mode() {
        Mode::Substitute => Ok(()),
        Mode::Transliterate => Err(unsupported(lit)),
        found => Err(Error::ModeMismatch {
            literal: lit.original().to_string(),
            expected: Mode::Substitute,
            found,
        }),
    }
}

fn unsupported(lit: &CompiledLiteral) -> Error {
    Error::UnsupportedMode {
        literal: lit.original().to_string(),
        mode: lit.mode(),
    }
}
