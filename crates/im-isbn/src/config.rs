//! Policy configuration
//!
//! The defaults reproduce the long-standing lenient behaviour: non-digit
//! characters count as zero, the formatter measures the raw input, and 979
//! codes convert to a numerically derived ISBN-10. Each knob opts into the
//! hardened alternative.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How validators treat characters that are not digits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterPolicy {
    /// Non-digit characters contribute 0 to the checksum; `X`/`x` counts 10
    /// wherever it appears in an ISBN-10
    #[default]
    Lenient,
    /// Any character other than a digit fails validation, except `X`/`x` as
    /// the final ISBN-10 character
    Strict,
}

/// Whether the formatter and converter strip hyphens before slicing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HyphenPolicy {
    /// Work on the input exactly as given
    #[default]
    Preserve,
    /// Remove hyphens first, like the validators do
    Strip,
}

/// Behaviour switches shared by all `*_with_config` entry points
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IsbnConfig {
    pub character_policy: CharacterPolicy,
    pub hyphen_policy: HyphenPolicy,
    /// Refuse to convert 979-prefixed ISBN-13 codes to ISBN-10
    pub reject_979_prefix: bool,
}

impl IsbnConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Every hardened option switched on
    pub fn strict() -> Self {
        Self {
            character_policy: CharacterPolicy::Strict,
            hyphen_policy: HyphenPolicy::Strip,
            reject_979_prefix: true,
        }
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a file, picking the format by extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&contents)?,
            Some("toml") => Self::from_toml(&contents)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        tracing::debug!("Loaded ISBN config from {:?}: {:?}", path, config);
        Ok(config)
    }
}
