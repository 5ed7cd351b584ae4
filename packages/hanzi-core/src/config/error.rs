//! Configuration error types

use thiserror::Error;

use super::preset::Preset;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Range validation error
    #[error("Invalid range for field '{field}': {value} not in {min}..={max}. {hint}")]
    Range {
        field: String,
        value: String,
        min: String,
        max: String,
        hint: String,
    },

    /// Missing version field in YAML
    #[error("Missing 'version' field in configuration file. Add 'version: 1' to the top of your YAML file.")]
    MissingVersion,

    /// Unsupported version
    #[error("Unsupported configuration version {found}. Supported versions: {}", .supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u64, supported: Vec<u64> },

    /// Unknown preset name
    #[error("Unknown preset '{0}'. Valid presets: {}", Preset::NAMES.join(", "))]
    UnknownPreset(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create a range error with a hint
    pub fn range_with_hint(
        field: impl Into<String>,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
        hint: impl Into<String>,
    ) -> Self {
        Self::Range {
            field: field.into(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
            hint: hint.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_formatting() {
        let err = ConfigError::range_with_hint(
            "max_partition_length",
            9,
            1,
            5,
            "Partition search is exponential in word length",
        );

        let msg = err.to_string();
        assert!(msg.contains("max_partition_length"));
        assert!(msg.contains("9"));
        assert!(msg.contains("1..=5"));
        assert!(msg.contains("exponential"));
    }

    #[test]
    fn test_unsupported_version_error() {
        let err = ConfigError::UnsupportedVersion {
            found: 2,
            supported: vec![1],
        };

        let msg = err.to_string();
        assert!(msg.contains("version 2"));
        assert!(msg.contains("Supported versions: 1"));
    }

    #[test]
    fn test_unknown_preset_error() {
        let err = ConfigError::UnknownPreset("paranoid".to_string());
        let msg = err.to_string();
        assert!(msg.contains("paranoid"));
        assert!(msg.contains("strict, lenient"));
    }

    #[test]
    fn test_missing_version_error() {
        let msg = ConfigError::MissingVersion.to_string();
        assert!(msg.contains("version: 1"));
    }
}
