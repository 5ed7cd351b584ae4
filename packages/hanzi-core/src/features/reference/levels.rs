//! Leveled reference vocabularies (HSK 1..=6)

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashSet;
use tracing::{debug, info};

use super::error::{ReferenceError, ReferenceResult};
use crate::features::classifier::domain::TIER_COUNT;

const TIERS: usize = TIER_COUNT as usize;

/// One word set per tier plus the cumulative grapheme sets derived from them
#[derive(Debug, Clone, Default)]
pub struct LeveledReference {
    tiers: [AHashSet<String>; TIERS],

    /// Index N-1: every grapheme of every word at tier ≤ N
    graphemes_up_to: [AHashSet<char>; TIERS],
}

impl LeveledReference {
    pub fn new(tiers: [AHashSet<String>; TIERS]) -> Self {
        let mut graphemes_up_to: [AHashSet<char>; TIERS] = Default::default();
        let mut seen = AHashSet::new();
        for (slot, words) in tiers.iter().enumerate() {
            seen.extend(words.iter().flat_map(|w| w.chars()));
            graphemes_up_to[slot] = seen.clone();
        }
        Self {
            tiers,
            graphemes_up_to,
        }
    }

    /// Build from `(tier, word)` pairs
    pub fn from_words<I, S>(words: I) -> ReferenceResult<Self>
    where
        I: IntoIterator<Item = (u8, S)>,
        S: Into<String>,
    {
        let mut tiers: [AHashSet<String>; TIERS] = Default::default();
        for (tier, word) in words {
            let slot = slot(tier).ok_or(ReferenceError::InvalidTier(tier))?;
            tiers[slot].insert(word.into());
        }
        Ok(Self::new(tiers))
    }

    /// Load `hsk_1.csv` ..= `hsk_6.csv` from `dir`
    pub fn load_dir(dir: impl AsRef<Path>) -> ReferenceResult<Self> {
        let dir = dir.as_ref();
        let mut tiers: [AHashSet<String>; TIERS] = Default::default();
        for (slot, words) in tiers.iter_mut().enumerate() {
            let path = dir.join(format!("hsk_{}.csv", slot + 1));
            let file = File::open(&path)?;
            *words = read_tier(BufReader::new(file), &path)?;
        }
        let reference = Self::new(tiers);
        info!(
            "Loaded {} reference words from {}",
            reference.len(),
            dir.display()
        );
        Ok(reference)
    }

    /// Lowest tier containing `word` verbatim
    pub fn level_of(&self, word: &str) -> Option<u8> {
        self.tiers
            .iter()
            .position(|words| words.contains(word))
            .map(|slot| slot as u8 + 1)
    }

    /// Every grapheme appearing in a reference word at tier ≤ `tier`
    pub fn graphemes_up_to(&self, tier: u8) -> Option<&AHashSet<char>> {
        slot(tier).map(|s| &self.graphemes_up_to[s])
    }

    /// Total number of reference words across all tiers
    pub fn len(&self) -> usize {
        self.tiers.iter().map(|words| words.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn slot(tier: u8) -> Option<usize> {
    (1..=TIER_COUNT).contains(&tier).then(|| tier as usize - 1)
}

/// Headword is the third column; anything from the first `(` on is a gloss.
fn read_tier<R: BufRead>(reader: R, path: &Path) -> ReferenceResult<AHashSet<String>> {
    let mut words = AHashSet::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 3 {
            debug!(
                "{}:{}: expected at least 3 columns, skipping",
                path.display(),
                lineno + 1
            );
            continue;
        }
        let headword = fields[2].split('(').next().unwrap_or_default().trim();
        if !headword.is_empty() {
            words.insert(headword.to_string());
        }
    }
    Ok(words)
}
