//! Extraction configuration with validation.

use std::env;

use coulis_core::Scope;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SsrCoreError};

/// What happens to the registry once a render's styles are extracted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractConfig {
    /// Scopes cleared after each extraction. Never contains [`Scope::Global`].
    pub flush_scopes: Vec<Scope>,
}

impl ExtractConfig {
    /// Creates and validates a config.
    pub fn new(flush_scopes: Vec<Scope>) -> Result<Self> {
        if flush_scopes.contains(&Scope::Global) {
            return Err(SsrCoreError::InvalidConfig(
                "the global scope holds process-wide rules and cannot be flushed".to_string(),
            ));
        }

        let mut flush_scopes = flush_scopes;
        flush_scopes.sort();
        flush_scopes.dedup();

        Ok(Self { flush_scopes })
    }

    /// Flushes every non-global scope (per-render isolation).
    pub fn isolated() -> Self {
        Self {
            flush_scopes: Scope::ALL
                .into_iter()
                .filter(|scope| *scope != Scope::Global)
                .collect(),
        }
    }

    /// Keeps every scope after extraction.
    pub fn retained() -> Self {
        Self {
            flush_scopes: Vec::new(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `COULIS_SSR_FLUSH` - `true`/`false` to flush every non-global scope,
    ///   or a comma-separated scope list (default: `true`)
    pub fn from_env() -> Result<Self> {
        Self::from_value(env::var("COULIS_SSR_FLUSH").ok().as_deref())
    }

    /// Parses a `COULIS_SSR_FLUSH` value.
    pub fn from_value(value: Option<&str>) -> Result<Self> {
        let Some(value) = value.map(str::trim) else {
            return Ok(Self::isolated());
        };

        match value {
            "" | "true" | "1" => Ok(Self::isolated()),
            "false" | "0" => Ok(Self::retained()),
            list => {
                let scopes = list
                    .split(',')
                    .map(|s| {
                        s.trim()
                            .parse::<Scope>()
                            .map_err(|_| SsrCoreError::UnknownScope(s.trim().to_string()))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Self::new(scopes)
            }
        }
    }

    /// Returns true when extraction clears at least one scope.
    pub fn flushes(&self) -> bool {
        !self.flush_scopes.is_empty()
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self::isolated()
    }
}
