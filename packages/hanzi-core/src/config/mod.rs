//! Engine configuration
//!
//! Two layers:
//! - Preset: `EngineConfig::preset(Preset::Lenient)`
//! - YAML: `EngineConfig::from_yaml("hanzi.yaml")`, a preset plus per-section
//!   overrides, versioned (`version: 1`) and validated on load
//!
//! ```rust,ignore
//! use hanzi_core::config::{EngineConfig, Preset};
//!
//! let config = EngineConfig::preset(Preset::Strict).max_partition_length(3);
//! config.validate()?;
//! ```

pub mod engine_config;
pub mod error;
pub mod io;
pub mod preset;
pub mod validation;

pub use engine_config::{ClassifierConfig, CyclePolicy, DataPaths, EngineConfig, SequencerConfig};
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigFileV1, SUPPORTED_VERSIONS};
pub use preset::Preset;
pub use validation::Validatable;
