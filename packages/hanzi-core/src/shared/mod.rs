//! Shared grapheme utilities
//!
//! A grapheme here is a single Unicode scalar value. Word length is always
//! counted in scalars, never bytes.

/// Check whether a scalar lies in one of the CJK Unified Ideograph blocks.
///
/// Covers the base block and Extensions A through G.
pub fn is_cjk(c: char) -> bool {
    let x = c as u32;
    (0x4E00..=0x9FFF).contains(&x)
        || (0x3400..=0x4DBF).contains(&x)
        || (0x20000..=0x2A5DF).contains(&x)
        || (0x2A700..=0x2B73F).contains(&x)
        || (0x2B740..=0x2B81F).contains(&x)
        || (0x2B820..=0x2CEAF).contains(&x)
        || (0x2CEB0..=0x2EBEF).contains(&x)
        || (0x30000..=0x3134F).contains(&x)
}

/// Number of graphemes in a word
#[inline]
pub fn grapheme_len(word: &str) -> usize {
    word.chars().count()
}

/// The single grapheme of a one-grapheme word, if it is one
pub fn single_grapheme(word: &str) -> Option<char> {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
