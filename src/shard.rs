//! Splitting the search into leading-letter ranges to bound memory.

use crate::bits::{letter_bit, letters, lowest_bit, mask_letters, LETTER_A, LETTER_COUNT};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Letters at which a new range of leading letters starts.
///
/// `"eo"` gives the ranges `a..=d`, `e..=n` and `o..=z`. Each range is
/// paired and solved on its own, so fewer pairs are held at once. The
/// default is a single range over the whole alphabet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Shard {
    starts: u32,
}

impl Shard {
    pub fn new(letters: &str) -> Result<Self> {
        let mut starts = 0;
        for c in letters.chars() {
            let bit = u8::try_from(c.to_ascii_lowercase())
                .ok()
                .and_then(letter_bit)
                .ok_or(Error::InvalidShardLetter(c))?;
            starts |= bit;
        }
        Ok(Shard { starts })
    }

    /// Masks of consecutive leading letters, in order, covering the alphabet.
    pub fn ranges(&self) -> Vec<u32> {
        let bounds = self.starts | LETTER_A;
        letters(bounds)
            .map(|start| {
                let above = bounds & !(start | (start - 1));
                let end = match lowest_bit(above) {
                    0 => 1 << LETTER_COUNT,
                    next => next,
                };
                end - start
            })
            .collect()
    }

    pub fn is_sharded(&self) -> bool {
        self.starts & !LETTER_A != 0
    }
}

impl FromStr for Shard {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Shard::new(s)
    }
}

impl fmt::Display for Shard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&mask_letters(self.starts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::{word_mask, ALL_LETTERS};

    #[test]
    fn test_unsharded() {
        assert_eq!(Shard::default().ranges(), [ALL_LETTERS]);
        assert_eq!(Shard::new("").unwrap().ranges(), [ALL_LETTERS]);
        assert_eq!(Shard::new("a").unwrap().ranges(), [ALL_LETTERS]);
        assert!(!Shard::new("a").unwrap().is_sharded());
    }

    #[test]
    fn test_ranges() {
        let shard: Shard = "oE".parse().unwrap();
        assert!(shard.is_sharded());
        assert_eq!(shard.to_string(), "eo");
        let ranges = shard.ranges();
        assert_eq!(ranges.len(), 3);
        assert_eq!(ranges[0], word_mask("abcd").unwrap());
        assert_eq!(ranges[1], word_mask("efghijklmn").unwrap());
        assert_eq!(ranges[2], word_mask("opqrstuvwxyz").unwrap());
    }

    #[test]
    fn test_ranges_partition_alphabet() {
        let ranges = Shard::new("etoinsz").unwrap().ranges();
        assert_eq!(ranges.len(), 8);
        assert_eq!(ranges.iter().fold(0, |acc, r| acc | r), ALL_LETTERS);
        assert_eq!(ranges.iter().map(|r| r.count_ones()).sum::<u32>(), 26);
        assert_eq!(*ranges.last().unwrap(), 1 << 25);
    }

    #[test]
    fn test_invalid_letters() {
        assert!(matches!(Shard::new("ab1"), Err(Error::InvalidShardLetter('1'))));
        assert!(matches!(Shard::new("é"), Err(Error::InvalidShardLetter('é'))));
        assert!(matches!(Shard::new("a b"), Err(Error::InvalidShardLetter(' '))));
    }
}
