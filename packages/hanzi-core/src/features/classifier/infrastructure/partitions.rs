//! Ordered partitions of a word into contiguous blocks
//!
//! A word of n graphemes has n-1 cut points; each bitmask over the cut points
//! is one partition. Mask 0 (no cuts, the whole word) is skipped. Generation
//! is iterative so stack depth does not grow with word length.

/// Iterator over the non-trivial partitions of a word
pub struct Partitions<'w> {
    word: &'w str,
    /// Byte offsets of every grapheme boundary strictly inside the word
    cuts: Vec<usize>,
    mask: u32,
    end: u32,
}

impl<'w> Partitions<'w> {
    /// Callers bound the word length; more than 32 cut points is refused.
    pub fn new(word: &'w str) -> Self {
        let cuts: Vec<usize> = word.char_indices().skip(1).map(|(i, _)| i).collect();
        let end = if cuts.len() < 32 { 1u32 << cuts.len() } else { 0 };
        Self {
            word,
            cuts,
            mask: 1,
            end,
        }
    }
}

impl<'w> Iterator for Partitions<'w> {
    type Item = Vec<&'w str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask >= self.end {
            return None;
        }
        let mask = self.mask;
        self.mask += 1;

        let mut blocks = Vec::new();
        let mut start = 0;
        for (bit, &cut) in self.cuts.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                blocks.push(&self.word[start..cut]);
                start = cut;
            }
        }
        blocks.push(&self.word[start..]);
        Some(blocks)
    }
}
