//! Preset configurations
//!
//! Presets provide complete default configurations; YAML overrides are
//! applied on top of them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Fail on anything suspicious
    ///
    /// - Sequencer: dependency cycles are an error
    #[default]
    Strict,

    /// Best-effort output
    ///
    /// - Sequencer: units trapped in cycles are appended at the end
    Lenient,
}

impl Preset {
    pub const NAMES: [&'static str; 2] = ["strict", "lenient"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
