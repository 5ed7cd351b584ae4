//! IDS line parser
//!
//! Data lines look like
//!
//! ```text
//! U+4EE4<TAB>令<TAB>^⿱⿵𠆢丶龴$(G)<TAB>^⿱⿵𠆢一龴$(HTV)
//! ```
//!
//! Only the first annotation is used. Lines carrying components that have no
//! Unicode encoding are skipped wholesale.

use lazy_static::lazy_static;
use regex::Regex;

use crate::features::decomposition::domain::StructuralRecord;
use crate::shared::single_grapheme;

lazy_static! {
    static ref IDS_AND_REGIONS: Regex =
        Regex::new(r"^\^(?P<ids>\S+)\$\s*(\((?P<regions>[A-Z]+)\))?\s*").unwrap();
}

/// `{n}` placeholders, mirror, rotation, variation and unencodable markers
const UNENCODED_MARKERS: [char; 7] = ['{', '}', '↔', '↷', '〾', '?', '？'];

/// Why a line was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Comment,
    Blank,
    UnencodedComponent(char),
    TooFewFields(usize),
    InvalidGrapheme(String),
    NoAnnotation,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::Comment => write!(f, "comment"),
            Rejection::Blank => write!(f, "blank line"),
            Rejection::UnencodedComponent(c) => write!(f, "unencoded component marker '{}'", c),
            Rejection::TooFewFields(n) => write!(f, "expected at least 3 fields, found {}", n),
            Rejection::InvalidGrapheme(g) => write!(f, "not a single grapheme: {:?}", g),
            Rejection::NoAnnotation => write!(f, "no ^...$ annotation"),
        }
    }
}

/// A data line that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub record: StructuralRecord,
    /// Region letters, e.g. `GHT`
    pub regions: Option<String>,
}

pub fn parse_line(line: &str) -> Result<ParsedLine, Rejection> {
    if line.starts_with('#') {
        return Err(Rejection::Comment);
    }
    if line.trim().is_empty() {
        return Err(Rejection::Blank);
    }
    if let Some(marker) = line.chars().find(|c| UNENCODED_MARKERS.contains(c)) {
        return Err(Rejection::UnencodedComponent(marker));
    }

    let fields: Vec<&str> = line.trim_end().split('\t').collect();
    if fields.len() < 3 {
        return Err(Rejection::TooFewFields(fields.len()));
    }

    let grapheme = single_grapheme(fields[1])
        .ok_or_else(|| Rejection::InvalidGrapheme(fields[1].to_string()))?;

    let caps = IDS_AND_REGIONS
        .captures(fields[2])
        .ok_or(Rejection::NoAnnotation)?;
    let ids = caps.name("ids").map(|m| m.as_str()).unwrap_or_default();
    let regions = caps.name("regions").map(|m| m.as_str().to_string());

    Ok(ParsedLine {
        record: StructuralRecord::new(grapheme, ids),
        regions,
    })
}
