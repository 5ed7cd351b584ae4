//! Study Engine
//!
//! ```text
//! EngineConfig ──► DecompositionGraphBuilder ──► Arc<DecompositionGraph>
//!              ──► LeveledReference::load_dir ──► Arc<LeveledReference>
//!              ──► FrequencyTable::load       ──► Option<Arc<FrequencyTable>>
//!
//! classify_all(words) ──► Classifier (borrows graph + reference)
//! study_order(words)  ──► Sequencer  (borrows graph, priority = frequency)
//! ```
//!
//! ```rust,ignore
//! use hanzi_core::{EngineConfig, StudyEngine};
//!
//! let engine = StudyEngine::from_config(EngineConfig::from_yaml("hanzi.yaml")?)?;
//! let tiers = engine.classify_all(&words);
//! let order = engine.study_order(&words)?;
//! ```

use std::sync::Arc;

use tracing::info;

use crate::config::{EngineConfig, Validatable};
use crate::errors::Result;
use crate::features::classifier::{Classifier, Tier};
use crate::features::decomposition::{BuildReport, DecompositionGraph, DecompositionGraphBuilder};
use crate::features::reference::{FrequencyTable, LeveledReference};
use crate::features::sequencer::Sequencer;

#[derive(Debug, Clone)]
pub struct StudyEngine {
    config: EngineConfig,
    graph: Arc<DecompositionGraph>,
    reference: Arc<LeveledReference>,
    frequencies: Option<Arc<FrequencyTable>>,
    report: BuildReport,
}

impl StudyEngine {
    /// Load every data source named in `config`
    pub fn from_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let (graph, report) = DecompositionGraphBuilder::from_path(&config.data.ids)?;
        let reference = LeveledReference::load_dir(&config.data.reference_dir)?;
        let frequencies = match &config.data.frequencies {
            Some(path) => Some(Arc::new(FrequencyTable::load(path)?)),
            None => None,
        };

        info!(
            "Study engine ready: {} composites, {} reference words, frequencies {}",
            graph.characters().len(),
            reference.len(),
            if frequencies.is_some() { "loaded" } else { "absent" }
        );

        Ok(Self {
            config,
            graph: Arc::new(graph),
            reference: Arc::new(reference),
            frequencies,
            report,
        })
    }

    /// Assemble from already-built data
    pub fn new(
        config: EngineConfig,
        graph: impl Into<Arc<DecompositionGraph>>,
        reference: impl Into<Arc<LeveledReference>>,
    ) -> Self {
        Self {
            config,
            graph: graph.into(),
            reference: reference.into(),
            frequencies: None,
            report: BuildReport::default(),
        }
    }

    pub fn with_frequencies(mut self, table: impl Into<Arc<FrequencyTable>>) -> Self {
        self.frequencies = Some(table.into());
        self
    }

    pub fn classifier(&self) -> Classifier<'_> {
        Classifier::new(self.graph.as_ref(), &self.reference)
            .with_max_length(self.config.classifier.max_partition_length)
            .with_parallel_threshold(self.config.classifier.parallel_batch_threshold)
    }

    pub fn sequencer(&self) -> Sequencer<'_> {
        Sequencer::new(self.graph.as_ref()).with_cycle_policy(self.config.sequencer.cycle_policy)
    }

    /// One tier per word, in input order
    pub fn classify_all<S>(&self, words: &[S]) -> Vec<Tier>
    where
        S: AsRef<str> + Sync,
    {
        self.classifier().classify_batch(words)
    }

    /// Dependency-respecting order over `words` and their prerequisites.
    ///
    /// Ready units are ordered by frequency when a table is loaded, otherwise
    /// by string.
    pub fn study_order<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<String>> {
        let mut sequencer = self.sequencer();
        sequencer.add_all(words);
        let order = match &self.frequencies {
            Some(table) => sequencer.get_sorted(|unit| table.priority(unit))?,
            None => sequencer.get_sorted_lexicographic()?,
        };
        Ok(order)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn graph(&self) -> &Arc<DecompositionGraph> {
        &self.graph
    }

    pub fn reference(&self) -> &Arc<LeveledReference> {
        &self.reference
    }

    pub fn frequencies(&self) -> Option<&Arc<FrequencyTable>> {
        self.frequencies.as_ref()
    }

    /// Counters from the IDS load; all zero when built with `new`
    pub fn build_report(&self) -> &BuildReport {
        &self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CyclePolicy, Preset};
    use crate::features::decomposition::StructuralRecord;
    use crate::HanziError;

    fn engine(preset: Preset) -> StudyEngine {
        let mut graph = DecompositionGraph::new();
        graph.insert(StructuralRecord::new('你', "⿰亻尔")).unwrap();
        graph.insert(StructuralRecord::new('甲', "⿰乙口")).unwrap();
        graph.insert(StructuralRecord::new('乙', "⿱甲口")).unwrap();
        let reference = LeveledReference::from_words([(1, "你"), (2, "好")]).unwrap();
        StudyEngine::new(EngineConfig::preset(preset), graph, reference)
    }

    #[test]
    fn test_classify_all() {
        let engine = engine(Preset::Strict);
        let tiers = engine.classify_all(&["你", "亻", "你好", "猫"]);
        assert_eq!(
            tiers,
            vec![
                Tier::Level(1),
                Tier::BelowLevel(1),
                Tier::PlusLevel(2),
                Tier::Uncatalogued
            ]
        );
    }

    #[test]
    fn test_study_order_uses_frequencies() {
        let engine = engine(Preset::Strict)
            .with_frequencies(FrequencyTable::from_pairs([("尔", 0.1), ("亻", 0.2)]));
        let order = engine.study_order(&["你"]).unwrap();
        assert_eq!(order, vec!["尔", "亻", "你"]);
    }

    #[test]
    fn test_cycle_policy_follows_preset() {
        let strict = engine(Preset::Strict);
        assert!(matches!(
            strict.study_order(&["甲"]),
            Err(HanziError::Sequencer(_))
        ));

        let lenient = engine(Preset::Lenient);
        assert_eq!(
            lenient.config().sequencer.cycle_policy,
            CyclePolicy::AppendUnresolved
        );
        assert_eq!(lenient.study_order(&["甲"]).unwrap().len(), 3);
    }

    #[test]
    fn test_from_config_rejects_invalid_config() {
        let config = EngineConfig::default().max_partition_length(0);
        assert!(matches!(
            StudyEngine::from_config(config),
            Err(HanziError::Config(_))
        ));
    }
}
