//! Static reference data
//!
//! Leveled vocabularies (one set per tier) and per-character frequencies.
//! Both are loaded once at startup and shared read-only.

mod error;
mod frequency;
mod levels;

pub use error::{ReferenceError, ReferenceResult};
pub use frequency::{FrequencyTable, MISSING_FREQUENCY};
pub use levels::LeveledReference;
