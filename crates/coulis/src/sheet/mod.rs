//! Style sheet targets.
//!
//! A [`StyleSheet`] receives the rules of one scope. Two implementations
//! exist, selected once per context:
//!
//! - [`VirtualSheet`]: an in-memory rule buffer for server rendering and tests
//! - `DomSheet` (feature `dom`): a live `<style>` element in the document

#[cfg(feature = "dom")]
mod dom;
mod virtual_sheet;

use coulis_core::Scope;

use crate::config::{Config, TargetPreference};

#[cfg(feature = "dom")]
pub use dom::DomSheet;
pub use virtual_sheet::VirtualSheet;

/// Sink for the rules of one scope.
pub trait StyleSheet {
    /// The scope this sheet holds.
    fn scope(&self) -> Scope;

    /// Appends one rule.
    fn insert(&mut self, rule: &str);

    /// Returns the current CSS text.
    fn content(&self) -> String;

    /// Class names recorded by previously rendered markup.
    fn hydrated_class_names(&self) -> Vec<String>;

    /// Number of rules held.
    fn rule_count(&self) -> usize;

    /// Clears every rule, keeping the sheet usable.
    fn flush(&mut self);

    /// Clears every rule and detaches the sheet from its host.
    fn remove(&mut self);
}

/// The kind of style sheet a context writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetTarget {
    Virtual,
    #[cfg(feature = "dom")]
    Dom,
}

impl SheetTarget {
    /// Picks the target for a preference, detecting a live document once.
    pub fn detect(preference: TargetPreference) -> Self {
        match preference {
            TargetPreference::Virtual => Self::Virtual,
            TargetPreference::Auto | TargetPreference::Dom => {
                if document_available() {
                    #[cfg(feature = "dom")]
                    return Self::Dom;
                }
                if preference == TargetPreference::Dom {
                    tracing::debug!("No document available, using virtual style sheets");
                }
                Self::Virtual
            }
        }
    }

    /// Creates the sheet for one scope.
    #[cfg_attr(not(feature = "dom"), allow(unused_variables))]
    pub fn create(self, scope: Scope, config: &Config) -> Box<dyn StyleSheet> {
        match self {
            Self::Virtual => Box::new(VirtualSheet::new(scope)),
            #[cfg(feature = "dom")]
            Self::Dom => match DomSheet::locate_or_create(scope, config.insertion) {
                Some(sheet) => Box::new(sheet),
                None => {
                    tracing::warn!(scope = %scope, "Could not create style element, using virtual sheet");
                    Box::new(VirtualSheet::new(scope))
                }
            },
        }
    }
}

#[cfg(all(feature = "dom", target_arch = "wasm32"))]
fn document_available() -> bool {
    web_sys::window().and_then(|w| w.document()).is_some()
}

#[cfg(not(all(feature = "dom", target_arch = "wasm32")))]
fn document_available() -> bool {
    false
}
