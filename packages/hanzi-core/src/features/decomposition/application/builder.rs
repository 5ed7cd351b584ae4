//! Decomposition Graph Builder
//!
//! Streams IDS lines into a `DecompositionGraph`. Bad lines and bad
//! sequences never abort the build; they are logged and counted.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::features::decomposition::error::{DecompositionError, DecompositionResult};
use crate::features::decomposition::infrastructure::{
    parse_line, DecompositionGraph, InsertOutcome, Rejection,
};

/// Per-build counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub lines: usize,
    pub inserted: usize,
    pub duplicates: usize,
    pub comments: usize,
    pub blank: usize,
    pub unencoded: usize,
    pub too_few_fields: usize,
    pub invalid_grapheme: usize,
    pub no_annotation: usize,
    pub malformed_sequences: usize,
    pub conflicts: usize,
}

impl BuildReport {
    /// Data lines that did not end up in the graph
    pub fn skipped(&self) -> usize {
        self.unencoded
            + self.too_few_fields
            + self.invalid_grapheme
            + self.no_annotation
            + self.malformed_sequences
            + self.conflicts
    }

    fn record_rejection(&mut self, rejection: &Rejection) {
        match rejection {
            Rejection::Comment => self.comments += 1,
            Rejection::Blank => self.blank += 1,
            Rejection::UnencodedComponent(_) => self.unencoded += 1,
            Rejection::TooFewFields(_) => self.too_few_fields += 1,
            Rejection::InvalidGrapheme(_) => self.invalid_grapheme += 1,
            Rejection::NoAnnotation => self.no_annotation += 1,
        }
    }
}

/// Builds a decomposition graph from IDS sources
#[derive(Debug, Default)]
pub struct DecompositionGraphBuilder {
    graph: DecompositionGraph,
    report: BuildReport,
}

impl DecompositionGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an IDS file
    pub fn from_path(path: impl AsRef<Path>) -> DecompositionResult<(DecompositionGraph, BuildReport)> {
        let path = path.as_ref();
        info!("Loading decompositions from {}", path.display());
        let file = File::open(path)?;
        let mut builder = Self::new();
        builder.read(BufReader::new(file))?;
        Ok(builder.finish())
    }

    /// Convenience for in-memory sources
    pub fn from_str(text: &str) -> (DecompositionGraph, BuildReport) {
        let mut builder = Self::new();
        for line in text.lines() {
            builder.push_line(line);
        }
        builder.finish()
    }

    /// Consume every line of `reader`. Only IO failures are fatal.
    pub fn read<R: BufRead>(&mut self, reader: R) -> DecompositionResult<()> {
        for line in reader.lines() {
            self.push_line(&line?);
        }
        Ok(())
    }

    /// Parse and insert a single line
    pub fn push_line(&mut self, line: &str) {
        self.report.lines += 1;

        let parsed = match parse_line(line) {
            Ok(parsed) => parsed,
            Err(rejection) => {
                if !matches!(rejection, Rejection::Comment | Rejection::Blank) {
                    debug!("skipping line {}: {}", self.report.lines, rejection);
                }
                self.report.record_rejection(&rejection);
                return;
            }
        };

        match self.graph.insert(parsed.record) {
            Ok(InsertOutcome::Inserted { .. }) => self.report.inserted += 1,
            Ok(InsertOutcome::Unchanged) => self.report.duplicates += 1,
            Err(err @ DecompositionError::ConflictingRecord { .. }) => {
                warn!("line {}: {}", self.report.lines, err);
                self.report.conflicts += 1;
            }
            Err(err) => {
                debug!("line {}: {}", self.report.lines, err);
                self.report.malformed_sequences += 1;
            }
        }
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    pub fn finish(self) -> (DecompositionGraph, BuildReport) {
        info!(
            "Built decomposition graph: {} inserted, {} skipped, {} nodes, {} edges",
            self.report.inserted,
            self.report.skipped(),
            self.graph.node_count(),
            self.graph.edge_count()
        );
        (self.graph, self.report)
    }
}
