// Classifier Domain Models

use serde::{Deserialize, Serialize};

/// Number of leveled reference tiers
pub const TIER_COUNT: u8 = 6;

/// Difficulty bucket assigned to a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// The word is itself a tier-N reference word
    Level(u8),
    /// A single grapheme used inside tier ≤ N vocabulary
    BelowLevel(u8),
    /// A multi-block word whose best split tops out at tier N
    PlusLevel(u8),
    Uncatalogued,
}

impl Tier {
    /// Underlying numeric level; tiers compare on this alone
    pub fn level(&self) -> Option<u8> {
        match self {
            Tier::Level(n) | Tier::BelowLevel(n) | Tier::PlusLevel(n) => Some(*n),
            Tier::Uncatalogued => None,
        }
    }

    pub fn is_catalogued(&self) -> bool {
        !matches!(self, Tier::Uncatalogued)
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Level(n) => write!(f, "HSK{}", n),
            Tier::BelowLevel(n) => write!(f, "HSK{}-", n),
            Tier::PlusLevel(n) => write!(f, "HSK{}+", n),
            Tier::Uncatalogued => write!(f, "OTHER"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_deck_names() {
        assert_eq!(Tier::Level(3).to_string(), "HSK3");
        assert_eq!(Tier::BelowLevel(1).to_string(), "HSK1-");
        assert_eq!(Tier::PlusLevel(6).to_string(), "HSK6+");
        assert_eq!(Tier::Uncatalogued.to_string(), "OTHER");
    }

    #[test]
    fn test_level() {
        assert_eq!(Tier::BelowLevel(4).level(), Some(4));
        assert_eq!(Tier::Uncatalogued.level(), None);
        assert!(!Tier::Uncatalogued.is_catalogued());
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&[Tier::Level(2), Tier::Uncatalogued]).unwrap();
        assert_eq!(json, r#"[{"Level":2},"Uncatalogued"]"#);
        let back: Vec<Tier> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Tier::Level(2), Tier::Uncatalogued]);
    }
}
