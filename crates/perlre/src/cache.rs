//! Compile cache keyed by the exact literal text.
//!
//! Entries are immutable and shared behind `Arc`; results never live in a
//! [`CompiledLiteral`], so a caller holding an entry cannot alter the cached
//! one.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use perlre_compiler::CompiledLiteral;

#[derive(Debug)]
pub struct LiteralCache {
    entries: RwLock<HashMap<String, Arc<CompiledLiteral>>>,
    enabled: AtomicBool,
}

impl Default for LiteralCache {
    fn default() -> Self {
        Self::new(true)
    }
}

impl LiteralCache {
    pub fn new(enabled: bool) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            enabled: AtomicBool::new(enabled),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Turn lookups and stores on or off. Existing entries are kept.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Cached entry for `literal`; always `None` while disabled.
    pub fn get(&self, literal: &str) -> Option<Arc<CompiledLiteral>> {
        if !self.is_enabled() {
            return None;
        }
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let hit = entries.get(literal).cloned();
        tracing::trace!(target: "perlre::cache", literal, hit = hit.is_some(), "lookup");
        hit
    }

    /// Store `compiled` under `literal`; a no-op while disabled.
    pub fn put(&self, literal: &str, compiled: Arc<CompiledLiteral>) {
        if !self.is_enabled() {
            return;
        }
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(literal.to_string(), compiled);
        tracing::debug!(target: "perlre::cache", literal, entries = entries.len(), "stored");
    }

    /// Drop every entry.
    pub fn flush(&self) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let dropped = entries.len();
        entries.clear();
        tracing::debug!(target: "perlre::cache", dropped, "flushed");
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cached entry for `literal`, or the result of `compile` stored for next time.
    ///
    /// Errors from `compile` are returned as is and nothing is stored.
    pub fn get_or_compile<E>(
        &self,
        literal: &str,
        compile: impl FnOnce(&str) -> Result<CompiledLiteral, E>,
    ) -> Result<Arc<CompiledLiteral>, E> {
        if let Some(hit) = self.get(literal) {
            return Ok(hit);
        }
        let compiled = Arc::new(compile(literal)?);
        self.put(literal, Arc::clone(&compiled));
        Ok(compiled)
    }
}
