//! Scope registry: the ordered style sheets plus the content cache.
//!
//! Sheets are created for every scope, in precedence order, when the
//! registry is built. That order never changes, so a conditional override
//! always lands after the unconditional rule it overrides.

use coulis_core::{to_class_name, Scope};

use crate::cache::ContentCache;
use crate::sheet::{StyleSheet, VirtualSheet};

/// The ordered set of style sheets and the cache of emitted class names.
pub struct ScopeRegistry {
    sheets: Vec<Box<dyn StyleSheet>>,
    cache: ContentCache,
}

impl ScopeRegistry {
    /// Creates one sheet per scope, in precedence order, and seeds the cache
    /// with each sheet's hydrated class names.
    pub fn new<F>(mut create_sheet: F) -> Self
    where
        F: FnMut(Scope) -> Box<dyn StyleSheet>,
    {
        let sheets: Vec<Box<dyn StyleSheet>> = Scope::ALL.into_iter().map(&mut create_sheet).collect();

        let mut cache = ContentCache::new();
        for sheet in &sheets {
            let hydrated = sheet.hydrated_class_names();
            if !hydrated.is_empty() {
                tracing::debug!(
                    scope = %sheet.scope(),
                    count = hydrated.len(),
                    "Hydrated class names"
                );
            }
            cache.hydrate(sheet.scope(), hydrated);
        }

        Self { sheets, cache }
    }

    /// A registry backed by in-memory sheets.
    pub fn in_memory() -> Self {
        Self::new(|scope| Box::new(VirtualSheet::new(scope)))
    }

    /// Commits a rule under a cache key and returns its class name.
    ///
    /// If the class name is already cached, `create_rules` is not called and
    /// nothing is inserted. Otherwise every returned rule is inserted into the
    /// scope's sheet and the class name is cached.
    pub fn commit<F>(&mut self, scope: Scope, key: &str, create_rules: F) -> String
    where
        F: FnOnce(&str) -> Vec<String>,
    {
        let class_name = to_class_name(key);

        if self.cache.has(&class_name) {
            tracing::trace!(scope = %scope, class_name = %class_name, "Cache hit");
            return class_name;
        }

        let rules = create_rules(&class_name);
        let sheet = &mut self.sheets[scope.index()];
        for rule in &rules {
            sheet.insert(rule);
        }
        self.cache.set(class_name.clone(), scope);

        tracing::debug!(
            scope = %scope,
            class_name = %class_name,
            rules = rules.len(),
            "Inserted rules"
        );

        class_name
    }

    /// The sheet for a scope.
    pub fn sheet(&self, scope: Scope) -> &dyn StyleSheet {
        self.sheets[scope.index()].as_ref()
    }

    /// All sheets in precedence order.
    pub fn sheets(&self) -> impl Iterator<Item = &dyn StyleSheet> {
        self.sheets.iter().map(|sheet| sheet.as_ref())
    }

    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    /// Records class names as already present in a scope.
    pub fn hydrate<I, S>(&mut self, scope: Scope, class_names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cache.hydrate(scope, class_names);
    }

    /// Restores a scope rendered elsewhere: its CSS text is inserted as-is
    /// and its class names are cached without re-creating their rules.
    pub fn restore(&mut self, scope: Scope, class_names: &[String], content: &str) {
        if !content.trim().is_empty() {
            self.sheets[scope.index()].insert(content);
        }
        self.cache.hydrate(scope, class_names.iter().cloned());
        tracing::debug!(scope = %scope, count = class_names.len(), "Restored scope");
    }

    /// Clears a scope's sheet and forgets its cached class names.
    pub fn flush(&mut self, scope: Scope) {
        self.sheets[scope.index()].flush();
        self.cache.clear_scope(scope);
    }

    /// Flushes every scope except [`Scope::Global`].
    pub fn flush_non_global(&mut self) {
        for scope in Scope::ALL.into_iter().filter(|s| *s != Scope::Global) {
            self.flush(scope);
        }
    }

    /// The CSS text of every scope, concatenated in precedence order.
    pub fn content(&self) -> String {
        self.sheets.iter().map(|sheet| sheet.content()).collect()
    }
}

impl std::fmt::Debug for ScopeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopeRegistry")
            .field(
                "rules",
                &self
                    .sheets
                    .iter()
                    .map(|sheet| (sheet.scope(), sheet.rule_count()))
                    .collect::<Vec<_>>(),
            )
            .field("cache", &self.cache)
            .finish()
    }
}
