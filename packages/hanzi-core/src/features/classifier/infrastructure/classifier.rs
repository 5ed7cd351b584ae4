//! Difficulty Classifier
//!
//! Resolution order for a word:
//! 1. Exact reference match → `Level(N)` (the graph is never consulted)
//! 2. Single grapheme → `BelowLevel(N)` for the lowest N whose vocabulary
//!    uses it, directly or as a structural sub-component
//! 3. Partition search → the split whose hardest block is easiest wins
//!
//! ```text
//! score(p)   = max(level(block) for block in p)
//! result     = min(score(p) for p in partitions(word), p fully catalogued)
//! ```
//!
//! A winning split made only of exact `Level(N)` blocks resolves to
//! `Level(N)`; anything else resolves to `PlusLevel(N)`.

use ahash::AHashMap;
use rayon::prelude::*;
use tracing::debug;

use super::partitions::Partitions;
use crate::features::classifier::domain::{Tier, TIER_COUNT};
use crate::features::decomposition::StructureIndex;
use crate::features::reference::LeveledReference;
use crate::shared::{grapheme_len, single_grapheme};

/// Hard upper bound on the partition search
pub const MAX_PARTITION_LENGTH: usize = 5;

/// Batches below this size are classified sequentially
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

pub struct Classifier<'a> {
    index: &'a dyn StructureIndex,
    reference: &'a LeveledReference,
    max_length: usize,
    parallel_threshold: usize,
}

impl<'a> Classifier<'a> {
    pub fn new(index: &'a dyn StructureIndex, reference: &'a LeveledReference) -> Self {
        Self {
            index,
            reference,
            max_length: MAX_PARTITION_LENGTH,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Lower the partition search bound. Values above `MAX_PARTITION_LENGTH`
    /// are clamped. Exact reference matches are unaffected.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length.min(MAX_PARTITION_LENGTH);
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn classify(&self, word: &str) -> Tier {
        let mut memo = AHashMap::new();
        self.classify_memo(word, &mut memo)
    }

    /// Classify every word; output order matches input order.
    pub fn classify_batch<S>(&self, words: &[S]) -> Vec<Tier>
    where
        S: AsRef<str> + Sync,
    {
        if words.len() < self.parallel_threshold {
            return words.iter().map(|w| self.classify(w.as_ref())).collect();
        }
        debug!("classifying {} words in parallel", words.len());
        words.par_iter().map(|w| self.classify(w.as_ref())).collect()
    }

    fn classify_memo<'w>(&self, word: &'w str, memo: &mut AHashMap<&'w str, Tier>) -> Tier {
        if let Some(tier) = memo.get(word) {
            return *tier;
        }
        let tier = self.resolve(word, memo);
        memo.insert(word, tier);
        tier
    }

    fn resolve<'w>(&self, word: &'w str, memo: &mut AHashMap<&'w str, Tier>) -> Tier {
        let length = grapheme_len(word);
        if length == 0 || length > MAX_PARTITION_LENGTH {
            return Tier::Uncatalogued;
        }

        if let Some(level) = self.reference.level_of(word) {
            return Tier::Level(level);
        }

        if let Some(grapheme) = single_grapheme(word) {
            if let Some(level) = self.structural_level(grapheme) {
                return Tier::BelowLevel(level);
            }
        }

        if length > self.max_length {
            return Tier::Uncatalogued;
        }
        self.best_partition(word, memo)
    }

    /// Lowest tier whose vocabulary uses `grapheme`, verbatim or as a
    /// sub-component of one of its graphemes.
    fn structural_level(&self, grapheme: char) -> Option<u8> {
        let mut containers: Option<Vec<char>> = None;

        for level in 1..=TIER_COUNT {
            let Some(used) = self.reference.graphemes_up_to(level) else {
                continue;
            };
            if used.contains(&grapheme) {
                return Some(level);
            }

            let containers = containers.get_or_insert_with(|| {
                self.index
                    .components_of(grapheme)
                    .into_iter()
                    .map(|(c, _)| c)
                    .collect()
            });
            if containers.iter().any(|c| used.contains(c)) {
                return Some(level);
            }
        }
        None
    }

    fn best_partition<'w>(&self, word: &'w str, memo: &mut AHashMap<&'w str, Tier>) -> Tier {
        // (score, all blocks are exact Level(score))
        let mut best: Option<(u8, bool)> = None;

        for blocks in Partitions::new(word) {
            let mut tiers = Vec::with_capacity(blocks.len());
            for &block in &blocks {
                let tier = self.classify_memo(block, memo);
                if !tier.is_catalogued() {
                    break;
                }
                tiers.push(tier);
            }
            if tiers.len() != blocks.len() {
                continue;
            }

            let score = tiers.iter().filter_map(Tier::level).max().unwrap_or(0);
            let exact = tiers.iter().all(|t| *t == Tier::Level(score));

            best = match best {
                None => Some((score, exact)),
                Some((s, _)) if score < s => Some((score, exact)),
                Some((s, e)) if score == s => Some((s, e || exact)),
                keep => keep,
            };
        }

        match best {
            Some((level, true)) => Tier::Level(level),
            Some((level, false)) => Tier::PlusLevel(level),
            None => Tier::Uncatalogued,
        }
    }
}
