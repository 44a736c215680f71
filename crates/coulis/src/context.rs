//! The style context: one explicit owner for the registry, cache and adapter.
//!
//! A context is cheap to clone; clones share the same registry. It is meant
//! to be created once per process (or once per isolated render arena) and
//! used from a single thread.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use indexmap::IndexMap;

use coulis_core::{
    flatten_custom_properties, global_rules, keyframes_rule, root_rule, CoulisError, CssValue,
    GlobalStyles, Keyframes, Result, Scope, StyleContract, StyleObject, TokenTree,
};

use crate::adapter::{Capability, NoticeLog, PlatformAdapter};
use crate::config::Config;
use crate::registry::ScopeRegistry;
use crate::sheet::SheetTarget;
use crate::styles::Styles;

/// Shared engine state plus the operations that write to it.
#[derive(Clone)]
pub struct StyleContext {
    registry: Rc<RefCell<ScopeRegistry>>,
    adapter: Option<Rc<dyn PlatformAdapter>>,
    notices: Rc<NoticeLog>,
    config: Config,
}

impl StyleContext {
    /// Creates a context, choosing the style sheet target from `config`.
    pub fn new(config: Config) -> Self {
        let target = SheetTarget::detect(config.target);
        tracing::debug!(?target, insertion = ?config.insertion, "Creating style context");
        let registry = ScopeRegistry::new(|scope| target.create(scope, &config));
        Self::from_registry(registry, config)
    }

    /// Creates a context configured from the environment.
    pub fn from_env() -> Self {
        Self::new(Config::from_env())
    }

    /// Creates a context backed by in-memory style sheets.
    pub fn in_memory() -> Self {
        Self::from_registry(ScopeRegistry::in_memory(), Config::virtual_target())
    }

    /// Wraps an existing registry.
    pub fn from_registry(registry: ScopeRegistry, config: Config) -> Self {
        Self {
            registry: Rc::new(RefCell::new(registry)),
            adapter: None,
            notices: Rc::new(NoticeLog::default()),
            config,
        }
    }

    /// Installs a platform adapter.
    pub fn with_adapter(mut self, adapter: impl PlatformAdapter + 'static) -> Self {
        self.adapter = Some(Rc::new(adapter));
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a styling function bound to a contract.
    pub fn create_styles(&self, contract: StyleContract) -> Styles {
        Styles::new(self.clone(), Arc::new(contract), None)
    }

    /// Returns a styling function whose rules are wrapped in a grouping rule,
    /// e.g. `("@media", "(min-width: 640px)")`.
    pub fn create_grouped_styles(
        &self,
        at_rule: &str,
        condition: &str,
        contract: StyleContract,
    ) -> Styles {
        let prelude = format!("{} {}", at_rule.trim(), condition.trim());
        Styles::new(self.clone(), Arc::new(contract), Some(prelude))
    }

    /// Resolves an input against a loose, state-less contract.
    pub fn styles(&self, input: &StyleObject) -> Result<String> {
        self.create_styles(StyleContract::loose()).resolve(input)
    }

    /// Commits a `@keyframes` rule to the global scope and returns its name.
    pub fn create_keyframes(&self, keyframes: &Keyframes) -> Result<String> {
        if !self.supports(Capability::Keyframes) {
            return Ok(String::new());
        }

        let key = serialize_key(keyframes)?;
        Ok(self.commit(Scope::Global, &key, |name| {
            vec![keyframes_rule(name, keyframes)]
        }))
    }

    /// Commits global rules (resets, `@import`, element selectors).
    pub fn set_global_styles(&self, styles: &GlobalStyles) -> Result<()> {
        if !self.supports(Capability::GlobalStyles) {
            return Ok(());
        }

        let key = serialize_key(styles)?;
        self.commit(Scope::Global, &key, |_| global_rules(styles));
        Ok(())
    }

    /// Declares a token tree as custom properties on `:root` and returns the
    /// same tree with every leaf replaced by its `var(--name)` reference.
    pub fn create_custom_properties(
        &self,
        tokens: &IndexMap<String, TokenTree>,
    ) -> Result<IndexMap<String, TokenTree>> {
        if !self.supports(Capability::CustomProperties) {
            return Ok(IndexMap::new());
        }

        let (properties, mirror) = flatten_custom_properties(tokens);
        if !properties.is_empty() {
            let key = serialize_key(&properties)?;
            self.commit(Scope::Global, &key, |_| vec![root_rule(&properties)]);
        }
        Ok(mirror)
    }

    /// Reads the registry.
    pub fn with_registry<R>(&self, f: impl FnOnce(&ScopeRegistry) -> R) -> R {
        f(&self.registry.borrow())
    }

    /// Mutates the registry (hydration, flushing).
    pub fn with_registry_mut<R>(&self, f: impl FnOnce(&mut ScopeRegistry) -> R) -> R {
        f(&mut self.registry.borrow_mut())
    }

    /// The CSS text of every scope in precedence order.
    pub fn content(&self) -> String {
        self.with_registry(ScopeRegistry::content)
    }

    pub(crate) fn commit<F>(&self, scope: Scope, key: &str, create_rules: F) -> String
    where
        F: FnOnce(&str) -> Vec<String>,
    {
        self.registry.borrow_mut().commit(scope, key, create_rules)
    }

    pub(crate) fn translate(&self, property: &str, value: CssValue) -> CssValue {
        match &self.adapter {
            Some(adapter) => adapter.translate(property, value),
            None => value,
        }
    }

    fn supports(&self, capability: Capability) -> bool {
        let Some(adapter) = &self.adapter else {
            return true;
        };
        if adapter.supports(capability) {
            return true;
        }
        self.notices.notify_once(format!(
            "The {} adapter does not support {capability}",
            adapter.name()
        ));
        false
    }
}

impl std::fmt::Debug for StyleContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleContext")
            .field("registry", &self.registry.borrow())
            .field("adapter", &self.adapter.as_ref().map(|a| a.name().to_string()))
            .field("config", &self.config)
            .finish()
    }
}

fn serialize_key<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| CoulisError::Serialization(e.to_string()))
}
