//! JSON style documents.
//!
//! A document bundles a contract with the inputs to run through it:
//!
//! ```json
//! {
//!   "contract": {
//!     "properties": { "color": true, "display": ["block", "none"], "gap": { "1": "4px" } },
//!     "shorthands": { "size": ["width", "height"] },
//!     "states": { "hover": "&:hover{decl}" },
//!     "loose": false
//!   },
//!   "globalStyles": { "body": { "margin": 0 } },
//!   "keyframes": { "fade": { "from": { "opacity": 0 }, "to": { "opacity": 1 } } },
//!   "customProperties": { "color": { "brand": "#f00" } },
//!   "styles": [{ "color": { "base": "black", "hover": "red" } }],
//!   "groups": [{ "atRule": "@media", "condition": "(min-width: 640px)", "styles": [] }]
//! }
//! ```

use std::fs;
use std::path::Path;

use coulis_core::{
    CssValue, GlobalStyles, Keyframes, PropertyMapping, StyleContract, StyleObject, TokenTree,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// The contract entry for one property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyDocument {
    /// `true` passes every value through; `false` leaves the property out.
    Enabled(bool),
    /// Only the listed values pass.
    Allowed(Vec<CssValue>),
    /// Values are looked up by their string form.
    Lookup(IndexMap<String, CssValue>),
}

impl PropertyDocument {
    fn mapping(&self) -> Option<PropertyMapping> {
        match self {
            Self::Enabled(true) => Some(PropertyMapping::PassThrough),
            Self::Enabled(false) => None,
            Self::Allowed(values) => Some(PropertyMapping::Allowed(values.clone())),
            Self::Lookup(table) => Some(PropertyMapping::Lookup(table.clone())),
        }
    }
}

/// A contract as written in a document. State templates are strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContractDocument {
    pub properties: IndexMap<String, PropertyDocument>,
    pub shorthands: IndexMap<String, Vec<String>>,
    pub states: IndexMap<String, String>,
    pub loose: bool,
}

impl ContractDocument {
    /// Builds and validates the contract.
    pub fn build(&self) -> Result<StyleContract> {
        let mut builder = StyleContract::builder().loose(self.loose);

        for (name, property) in &self.properties {
            if let Some(mapping) = property.mapping() {
                builder = builder.property(name.clone(), mapping);
            }
        }
        for (name, targets) in &self.shorthands {
            builder = builder.shorthand(name.clone(), targets.clone());
        }
        for (name, template) in &self.states {
            builder = builder.state(name.clone(), template.as_str());
        }

        Ok(builder.build()?)
    }
}

/// Inputs resolved inside a grouping rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDocument {
    pub at_rule: String,
    pub condition: String,
    #[serde(default)]
    pub styles: Vec<StyleObject>,
}

/// A complete style document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleDocument {
    pub contract: ContractDocument,
    pub global_styles: Option<GlobalStyles>,
    pub keyframes: IndexMap<String, Keyframes>,
    pub custom_properties: Option<IndexMap<String, TokenTree>>,
    pub styles: Vec<StyleObject>,
    pub groups: Vec<GroupDocument>,
}

impl StyleDocument {
    /// Reads and parses a document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
