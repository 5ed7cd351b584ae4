//! EngineConfig - data locations plus classifier/sequencer settings

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigFileV1, SUPPORTED_VERSIONS};
use super::preset::Preset;
use super::validation::Validatable;
use crate::features::classifier::{DEFAULT_PARALLEL_THRESHOLD, MAX_PARTITION_LENGTH};

/// What the sequencer does when the dependency graph has a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePolicy {
    /// `get_sorted` fails with the units involved
    #[default]
    Reject,
    /// Units blocked by a cycle follow the resolved order, by priority
    AppendUnresolved,
}

/// Static data locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    /// IDS decomposition file
    pub ids: PathBuf,

    /// Directory holding `hsk_1.csv` ..= `hsk_6.csv`
    pub reference_dir: PathBuf,

    /// Optional `idx,char,count,percentage` frequency CSV
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequencies: Option<PathBuf>,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            ids: PathBuf::from("data/ids.txt"),
            reference_dir: PathBuf::from("data/hsk"),
            frequencies: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Longest word the partition search accepts (1..=5)
    pub max_partition_length: usize,

    /// Batches at least this large are classified on the rayon pool
    pub parallel_batch_threshold: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            max_partition_length: MAX_PARTITION_LENGTH,
            parallel_batch_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl Validatable for ClassifierConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_partition_length == 0 || self.max_partition_length > MAX_PARTITION_LENGTH {
            return Err(ConfigError::range_with_hint(
                "max_partition_length",
                self.max_partition_length,
                1,
                MAX_PARTITION_LENGTH,
                "Partition search is exponential in word length",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequencerConfig {
    pub cycle_policy: CyclePolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    #[serde(skip)]
    preset: Preset,
    pub data: DataPaths,
    pub classifier: ClassifierConfig,
    pub sequencer: SequencerConfig,
}

impl EngineConfig {
    pub fn preset(preset: Preset) -> Self {
        let cycle_policy = match preset {
            Preset::Strict => CyclePolicy::Reject,
            Preset::Lenient => CyclePolicy::AppendUnresolved,
        };
        Self {
            preset,
            data: DataPaths::default(),
            classifier: ClassifierConfig::default(),
            sequencer: SequencerConfig { cycle_policy },
        }
    }

    pub fn get_preset(&self) -> Preset {
        self.preset
    }

    // Builder-style overrides

    pub fn data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        self.data.ids = dir.join("ids.txt");
        self.data.reference_dir = dir.join("hsk");
        self
    }

    pub fn frequencies(mut self, path: impl Into<PathBuf>) -> Self {
        self.data.frequencies = Some(path.into());
        self
    }

    pub fn max_partition_length(mut self, n: usize) -> Self {
        self.classifier.max_partition_length = n;
        self
    }

    pub fn parallel_batch_threshold(mut self, n: usize) -> Self {
        self.classifier.parallel_batch_threshold = n;
        self
    }

    pub fn cycle_policy(mut self, policy: CyclePolicy) -> Self {
        self.sequencer.cycle_policy = policy;
        self
    }

    /// Load YAML configuration from file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        debug!("loading engine config from {}", path.display());
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let raw: serde_yaml::Value = serde_yaml::from_str(content)?;
        let version = raw
            .get("version")
            .ok_or(ConfigError::MissingVersion)?
            .as_u64()
            .ok_or_else(|| ConfigError::Validation("'version' must be an integer".to_string()))?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let file: ConfigFileV1 = serde_yaml::from_value(raw)?;
        let mut config = Self::preset(file.preset.parse()?);
        if let Some(data) = file.data {
            data.apply(&mut config.data);
        }
        if let Some(classifier) = file.classifier {
            classifier.apply(&mut config.classifier);
        }
        if let Some(sequencer) = file.sequencer {
            sequencer.apply(&mut config.sequencer);
        }

        config.validate()?;
        Ok(config)
    }

    /// Export as YAML v1
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: SUPPORTED_VERSIONS[0],
            preset: self.preset.to_string(),
            data: Some((&self.data).into()),
            classifier: Some((&self.classifier).into()),
            sequencer: Some((&self.sequencer).into()),
        };
        Ok(serde_yaml::to_string(&file)?)
    }
}

impl Validatable for EngineConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.classifier.validate()
    }
}
