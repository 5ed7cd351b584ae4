//! Character frequency table
//!
//! Source rows are `idx,char,count,percentage`. The percentage is used as a
//! sequencing priority, lower sorting earlier.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;
use tracing::info;

use super::error::{ReferenceError, ReferenceResult};

/// Value used for characters absent from the table
pub const MISSING_FREQUENCY: f64 = 99_999_999.0;

#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    by_unit: AHashMap<String, f64>,
}

impl FrequencyTable {
    pub fn load(path: impl AsRef<Path>) -> ReferenceResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let table = Self::read(BufReader::new(file), path)?;
        info!(
            "Loaded {} frequencies from {}",
            table.by_unit.len(),
            path.display()
        );
        Ok(table)
    }

    /// Parse rows from `reader`; `path` is only used in error messages.
    pub fn read<R: BufRead>(reader: R, path: &Path) -> ReferenceResult<Self> {
        let mut by_unit = AHashMap::new();
        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let malformed = |reason: String| ReferenceError::MalformedRow {
                path: path.to_path_buf(),
                line: lineno + 1,
                reason,
            };

            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != 4 {
                return Err(malformed(format!(
                    "expected 4 columns, found {}",
                    fields.len()
                )));
            }
            let percentage: f64 = fields[3]
                .trim()
                .parse()
                .map_err(|e| malformed(format!("bad percentage {:?}: {}", fields[3], e)))?;
            by_unit.insert(fields[1].trim().to_string(), percentage);
        }
        Ok(Self { by_unit })
    }

    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            by_unit: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Mean frequency over the graphemes of `unit`; absent graphemes count
    /// as `MISSING_FREQUENCY`. `None` for an empty unit.
    pub fn frequency(&self, unit: &str) -> Option<f64> {
        let mut total = 0.0;
        let mut count = 0usize;
        let mut buf = [0u8; 4];
        for c in unit.chars() {
            total += self
                .by_unit
                .get(c.encode_utf8(&mut buf) as &str)
                .copied()
                .unwrap_or(MISSING_FREQUENCY);
            count += 1;
        }
        (count > 0).then(|| total / count as f64)
    }

    /// Priority function for the sequencer
    pub fn priority(&self, unit: &str) -> Option<f64> {
        self.frequency(unit)
    }

    pub fn len(&self) -> usize {
        self.by_unit.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_unit.is_empty()
    }
}
