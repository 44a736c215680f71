//! Platform adapters.
//!
//! An adapter translates values before declarations are formatted and
//! declares which context operations its platform can honor. Unsupported
//! operations return an inert value and log a notice once.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;

use coulis_core::{to_kebab_case, CssValue};

/// Context operations a platform may not support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Keyframes,
    GlobalStyles,
    CustomProperties,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Keyframes => "keyframes",
            Self::GlobalStyles => "global styles",
            Self::CustomProperties => "custom properties",
        })
    }
}

/// Value translation for a rendering target.
pub trait PlatformAdapter {
    /// Name used in notices.
    fn name(&self) -> &str;

    /// Translates a mapped value for `property` before it is formatted.
    fn translate(&self, _property: &str, value: CssValue) -> CssValue {
        value
    }

    /// Returns true if the platform can honor the capability.
    fn supports(&self, _capability: Capability) -> bool {
        true
    }
}

/// Remembers which notices were already logged.
#[derive(Debug, Default)]
pub struct NoticeLog {
    seen: RefCell<HashSet<String>>,
}

impl NoticeLog {
    /// Logs `message` at debug level the first time it is seen.
    ///
    /// Returns true if the message was logged.
    pub fn notify_once(&self, message: String) -> bool {
        let first = self.seen.borrow_mut().insert(message.clone());
        if first {
            tracing::debug!("{message}");
        }
        first
    }

    /// Number of distinct notices logged so far.
    pub fn len(&self) -> usize {
        self.seen.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.borrow().is_empty()
    }
}

/// Converts CSS dimension strings into plain numbers for targets with a
/// single native unit.
///
/// `px` values keep their number, `rem`/`em` scale by the root font size,
/// `vw`/`vh` scale by the viewport. Anything else is returned unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionAdapter {
    pub root_font_size: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl DimensionAdapter {
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            root_font_size: 16.0,
            viewport_width,
            viewport_height,
        }
    }

    pub fn with_root_font_size(mut self, size: f64) -> Self {
        self.root_font_size = size;
        self
    }

    /// Converts one dimension string, if it has a known unit.
    pub fn convert(&self, text: &str) -> Option<f64> {
        let text = text.trim();
        let units: [(&str, f64); 5] = [
            ("rem", self.root_font_size),
            ("em", self.root_font_size),
            ("px", 1.0),
            ("vw", self.viewport_width / 100.0),
            ("vh", self.viewport_height / 100.0),
        ];

        units.iter().find_map(|(unit, factor)| {
            let number = text.strip_suffix(unit)?.trim().parse::<f64>().ok()?;
            Some(number * factor)
        })
    }
}

impl PlatformAdapter for DimensionAdapter {
    fn name(&self) -> &str {
        "dimension"
    }

    fn translate(&self, property: &str, value: CssValue) -> CssValue {
        match &value {
            CssValue::Text(text) => match self.convert(text) {
                Some(number) => CssValue::Number(number),
                None => {
                    tracing::trace!(property = %to_kebab_case(property), value = %text, "Value kept as-is");
                    value
                }
            },
            CssValue::Number(_) => value,
        }
    }

    fn supports(&self, _capability: Capability) -> bool {
        false
    }
}
