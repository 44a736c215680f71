//! Server context: extracts the registry as `<style>` markup after a render.

use coulis::{Config, StyleContext};
use coulis_ssr_core::{
    metadata_to_json, metadata_to_string, parse_style_elements, ExtractConfig, StyleMetadata,
};

use crate::error::Result;

/// A style context plus the extraction policy applied between renders.
///
/// Extraction must run after a render has produced all its styles and
/// before the next render starts.
#[derive(Debug, Clone)]
pub struct ServerContext {
    context: StyleContext,
    config: ExtractConfig,
}

impl ServerContext {
    pub fn new(context: StyleContext, config: ExtractConfig) -> Self {
        Self { context, config }
    }

    /// Creates an in-memory context that flushes every non-global scope.
    pub fn isolated() -> Self {
        Self::new(StyleContext::in_memory(), ExtractConfig::isolated())
    }

    /// Creates a context configured from the environment.
    pub fn from_env() -> Result<Self> {
        let config = ExtractConfig::from_env()?;
        Ok(Self::new(StyleContext::new(Config::from_env()), config))
    }

    pub fn context(&self) -> &StyleContext {
        &self.context
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Reads every scope, in precedence order, without changing anything.
    ///
    /// Empty scopes are included so a hydrating client keeps the same
    /// element order.
    pub fn metadata(&self) -> Vec<StyleMetadata> {
        self.context.with_registry(|registry| {
            registry
                .sheets()
                .map(|sheet| {
                    let scope = sheet.scope();
                    StyleMetadata::new(scope, registry.cache().class_names(scope), sheet.content())
                })
                .collect()
        })
    }

    /// The `<style>` tags for [`ServerContext::metadata`], concatenated.
    pub fn metadata_as_string(&self) -> String {
        metadata_to_string(&self.metadata())
    }

    /// Reads every scope, then flushes the scopes the policy names.
    pub fn extract(&self) -> Vec<StyleMetadata> {
        let metadata = self.metadata();

        let counts = self.context.with_registry(|registry| {
            registry
                .sheets()
                .map(|sheet| format!("{}={}", sheet.scope(), sheet.rule_count()))
                .collect::<Vec<_>>()
                .join(" ")
        });
        tracing::info!(rules = %counts, flush = self.config.flushes(), "Extracted styles");

        if self.config.flushes() {
            self.context.with_registry_mut(|registry| {
                for scope in &self.config.flush_scopes {
                    registry.flush(*scope);
                }
            });
        }

        metadata
    }

    /// The `<style>` tags for [`ServerContext::extract`], concatenated.
    pub fn extract_as_string(&self) -> String {
        metadata_to_string(&self.extract())
    }

    /// [`ServerContext::extract`] serialized as a JSON array.
    pub fn extract_as_json(&self) -> Result<String> {
        Ok(metadata_to_json(&self.extract())?)
    }
}

/// Creates an in-memory context seeded from server-rendered markup.
///
/// Every `<style>` element produced by extraction is restored into its
/// scope: its CSS text is kept and its class names are cached, so
/// resolving the same styles again inserts nothing.
pub fn hydrate_from_markup(html: &str) -> Result<StyleContext> {
    let context = StyleContext::in_memory();
    hydrate_context(&context, html)?;
    Ok(context)
}

/// Seeds an existing context from server-rendered markup.
pub fn hydrate_context(context: &StyleContext, html: &str) -> Result<()> {
    let styles = parse_style_elements(html)?;

    context.with_registry_mut(|registry| {
        for style in &styles {
            registry.restore(style.scope, &style.class_names, &style.content);
        }
    });

    let count: usize = styles.iter().map(|s| s.class_names.len()).sum();
    tracing::debug!(elements = styles.len(), class_names = count, "Hydrated from markup");
    Ok(())
}
