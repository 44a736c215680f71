//! Content-addressed record of emitted rules.
//!
//! Maps class name to the scope its rule lives in. Presence is the single
//! source of truth for "already emitted": a cached class name is never
//! inserted again until its scope is flushed.

use indexmap::IndexMap;

use coulis_core::Scope;

/// Class name to scope, in first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct ContentCache {
    entries: IndexMap<String, Scope>,
}

impl ContentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the class name has been emitted (or hydrated).
    pub fn has(&self, class_name: &str) -> bool {
        self.entries.contains_key(class_name)
    }

    /// Records a class name. Idempotent: the first recorded scope wins.
    pub fn set(&mut self, class_name: impl Into<String>, scope: Scope) {
        self.entries.entry(class_name.into()).or_insert(scope);
    }

    /// All recorded class names with their scopes.
    pub fn entries(&self) -> &IndexMap<String, Scope> {
        &self.entries
    }

    /// Class names recorded for one scope, in insertion order.
    pub fn class_names(&self, scope: Scope) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |(_, s)| **s == scope)
            .map(|(name, _)| name.as_str())
    }

    /// Seeds the cache with class names already present in a scope.
    pub fn hydrate<I, S>(&mut self, scope: Scope, class_names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in class_names {
            self.set(name, scope);
        }
    }

    /// Forgets every class name recorded for a scope.
    pub fn clear_scope(&mut self, scope: Scope) {
        self.entries.retain(|_, s| *s != scope);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
