//! Render configuration
//!
//! Controls the glyphs used when a [`Todo`](crate::Todo) or
//! [`TodoList`](crate::TodoList) is rendered to text.
//!
//! # Sources
//!
//! - Defaults: `X` for done, a space for undone, `----` around list titles
//! - Environment: `TODOLIST_DONE_MARKER`, `TODOLIST_UNDONE_MARKER`,
//!   `TODOLIST_HEADER_RULE` (unset variables keep the default)
//! - TOML: any subset of `done_marker`, `undone_marker`, `header_rule`
//!
//! # Example
//!
//! ```
//! use todolist_core::config::RenderConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RenderConfig::from_toml(r#"done_marker = "✓""#)?;
//! assert_eq!(config.done_marker, '✓');
//! assert_eq!(config.undone_marker, ' ');
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding the done marker
pub const DONE_MARKER_VAR: &str = "TODOLIST_DONE_MARKER";
/// Environment variable overriding the undone marker
pub const UNDONE_MARKER_VAR: &str = "TODOLIST_UNDONE_MARKER";
/// Environment variable overriding the header rule
pub const HEADER_RULE_VAR: &str = "TODOLIST_HEADER_RULE";

/// Default decoration printed on both sides of a list title
pub const DEFAULT_HEADER_RULE: &str = "----";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A marker was not exactly one printable character
    #[error("invalid {name}: {value:?} (expected a single printable character)")]
    InvalidMarker {
        /// Which marker was rejected
        name: &'static str,
        /// The rejected value
        value: String,
    },

    /// The header rule was empty or spanned several lines
    #[error("invalid header_rule: {0:?}")]
    InvalidHeaderRule(String),

    /// TOML input could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Glyphs used when rendering todos and lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Marker shown between brackets for a done todo
    pub done_marker: char,
    /// Marker shown between brackets for a todo that is not done
    pub undone_marker: char,
    /// Decoration around the list title in the header line
    pub header_rule: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            done_marker: crate::item::DONE_MARKER,
            undone_marker: crate::item::UNDONE_MARKER,
            header_rule: DEFAULT_HEADER_RULE.to_string(),
        }
    }
}

impl RenderConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set to an invalid value
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// `from_env` is this function backed by `std::env::var`.
    ///
    /// # Errors
    ///
    /// Returns error if a looked-up value is invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(DONE_MARKER_VAR) {
            config.done_marker = parse_marker("done_marker", &value)?;
        }
        if let Some(value) = lookup(UNDONE_MARKER_VAR) {
            config.undone_marker = parse_marker("undone_marker", &value)?;
        }
        if let Some(value) = lookup(HEADER_RULE_VAR) {
            config.header_rule = value;
        }

        config.validate()?;
        tracing::debug!(?config, "render configuration loaded");
        Ok(config)
    }

    /// Parse configuration from a TOML document
    ///
    /// # Errors
    ///
    /// Returns error if the document is malformed or a value is invalid
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns error if a marker is a control character or the header rule
    /// is empty or contains a line break
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, marker) in [
            ("done_marker", self.done_marker),
            ("undone_marker", self.undone_marker),
        ] {
            if marker.is_control() {
                return Err(ConfigError::InvalidMarker {
                    name,
                    value: marker.to_string(),
                });
            }
        }

        if self.header_rule.is_empty() || self.header_rule.contains(['\n', '\r']) {
            return Err(ConfigError::InvalidHeaderRule(self.header_rule.clone()));
        }

        Ok(())
    }
}

fn parse_marker(name: &'static str, value: &str) -> Result<char, ConfigError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(marker), None) if !marker.is_control() => Ok(marker),
        _ => Err(ConfigError::InvalidMarker {
            name,
            value: value.to_string(),
        }),
    }
}
