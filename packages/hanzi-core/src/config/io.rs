//! Configuration I/O (YAML loading)
//!
//! On-disk schema types. Loading and export live on `EngineConfig`.
//! Every section field is an optional override applied on top of the preset.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::engine_config::{ClassifierConfig, CyclePolicy, DataPaths, SequencerConfig};

/// Versions `from_yaml` accepts
pub const SUPPORTED_VERSIONS: [u64; 1] = [1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    pub version: u64,

    /// Base preset
    #[serde(default = "default_preset")]
    pub preset: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DataOverrides>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier: Option<ClassifierOverrides>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequencer: Option<SequencerOverrides>,
}

fn default_preset() -> String {
    "strict".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequencies: Option<PathBuf>,
}

impl DataOverrides {
    pub fn apply(self, data: &mut DataPaths) {
        if let Some(ids) = self.ids {
            data.ids = ids;
        }
        if let Some(dir) = self.reference_dir {
            data.reference_dir = dir;
        }
        if let Some(frequencies) = self.frequencies {
            data.frequencies = Some(frequencies);
        }
    }
}

impl From<&DataPaths> for DataOverrides {
    fn from(data: &DataPaths) -> Self {
        Self {
            ids: Some(data.ids.clone()),
            reference_dir: Some(data.reference_dir.clone()),
            frequencies: data.frequencies.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_partition_length: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_batch_threshold: Option<usize>,
}

impl ClassifierOverrides {
    pub fn apply(self, classifier: &mut ClassifierConfig) {
        if let Some(n) = self.max_partition_length {
            classifier.max_partition_length = n;
        }
        if let Some(n) = self.parallel_batch_threshold {
            classifier.parallel_batch_threshold = n;
        }
    }
}

impl From<&ClassifierConfig> for ClassifierOverrides {
    fn from(classifier: &ClassifierConfig) -> Self {
        Self {
            max_partition_length: Some(classifier.max_partition_length),
            parallel_batch_threshold: Some(classifier.parallel_batch_threshold),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SequencerOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_policy: Option<CyclePolicy>,
}

impl SequencerOverrides {
    pub fn apply(self, sequencer: &mut SequencerConfig) {
        if let Some(policy) = self.cycle_policy {
            sequencer.cycle_policy = policy;
        }
    }
}

impl From<&SequencerConfig> for SequencerOverrides {
    fn from(sequencer: &SequencerConfig) -> Self {
        Self {
            cycle_policy: Some(sequencer.cycle_policy),
        }
    }
}
