use std::env;

/// How rules are written into a live document style element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertionMode {
    /// `CSSStyleSheet.insertRule` (fast, not visible in the element's text).
    #[default]
    Speedy,
    /// Text appended to the element (readable in dev tools).
    Verbose,
}

/// Which style sheet target a context is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetPreference {
    /// Use the live document when one is available, virtual otherwise.
    #[default]
    Auto,
    /// Always use in-memory buffers.
    Virtual,
    /// Use the live document; falls back to virtual without one.
    Dom,
}

/// Engine configuration loaded from environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// DOM insertion mode (default: speedy)
    pub insertion: InsertionMode,
    /// Style sheet target (default: auto)
    pub target: TargetPreference,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `COULIS_ENV` - `production` (default) for speedy insertion, anything else for verbose
    /// - `COULIS_TARGET` - `auto` (default), `virtual` or `dom`
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("COULIS_ENV").ok().as_deref(),
            env::var("COULIS_TARGET").ok().as_deref(),
        )
    }

    /// Build configuration from raw values (unset values use defaults).
    pub fn from_values(environment: Option<&str>, target: Option<&str>) -> Self {
        let insertion = match environment.map(str::trim) {
            None | Some("") | Some("production") => InsertionMode::Speedy,
            Some(_) => InsertionMode::Verbose,
        };
        let target = match target.map(|t| t.trim().to_ascii_lowercase()).as_deref() {
            Some("virtual") => TargetPreference::Virtual,
            Some("dom") => TargetPreference::Dom,
            _ => TargetPreference::Auto,
        };
        Self { insertion, target }
    }

    /// A configuration that always renders into memory.
    pub fn virtual_target() -> Self {
        Self {
            target: TargetPreference::Virtual,
            ..Self::default()
        }
    }
}
