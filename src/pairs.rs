//! Disjoint word pairs.

use crate::bits::{lowest_bit, lowest_clear_bit, ALL_LETTERS};
use crate::index::LeadingLetterIndex;
use itertools::Itertools;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Map from pair mask to one word of every word pair spelling it.
///
/// The other word of a pair is `pair ^ word`, so only one is stored.
#[derive(Debug, Default, Clone)]
pub struct PairBitsets {
    pairs: FxHashMap<u32, Vec<u32>>,
}

impl PairBitsets {
    /// Combine every word with every later-starting word it shares no letter with.
    pub fn new(index: &LeadingLetterIndex) -> Self {
        Self::with_leading_letters(index, ALL_LETTERS)
    }

    /// As [`PairBitsets::new`] but only for pairs whose earliest letter is in `leads`.
    pub fn with_leading_letters(index: &LeadingLetterIndex, leads: u32) -> Self {
        let last_start = index.last_letter();
        let pairs = index
            .iter()
            .filter(|(letter, _)| letter & leads != 0)
            .collect_vec()
            .into_par_iter()
            .map(|(letter, words)| pair_bucket(index, letter, words, last_start))
            .reduce(FxHashMap::default, |mut a, b| {
                a.extend(b);
                a
            });
        PairBitsets { pairs }
    }

    /// Number of distinct pair masks.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of word pairs, counting every representative.
    pub fn pair_count(&self) -> usize {
        self.pairs.values().map(Vec::len).sum()
    }

    /// Stored words for `pair`, empty if it is unknown.
    pub fn representatives(&self, pair: u32) -> &[u32] {
        self.pairs.get(&pair).map_or(&[][..], Vec::as_slice)
    }

    /// The two word masks of every word pair spelling `pair`.
    pub fn word_pairs(&self, pair: u32) -> impl Iterator<Item = (u32, u32)> + Clone + '_ {
        self.representatives(pair)
            .iter()
            .map(move |&word| (word, pair ^ word))
    }

    pub fn masks(&self) -> impl Iterator<Item = u32> + '_ {
        self.pairs.keys().copied()
    }

    /// Add pairs from another, disjoint, set.
    pub fn absorb(&mut self, other: PairBitsets) {
        self.pairs.extend(other.pairs);
    }

    /// Keep only pairs whose earliest letter is in `leads`.
    pub fn retain_leading_letters(&mut self, leads: u32) {
        self.pairs.retain(|&pair, _| lowest_bit(pair) & leads != 0);
    }
}

/// Pairs for every word starting with `letter`.
///
/// Partners are only looked for among words starting after `letter`, at a
/// letter neither word has yet, so each unordered pair is found once.
fn pair_bucket(
    index: &LeadingLetterIndex,
    letter: u32,
    words: &[u32],
    last_start: u32,
) -> FxHashMap<u32, Vec<u32>> {
    let mut pairs: FxHashMap<u32, Vec<u32>> = FxHashMap::default();
    for &word in words {
        let blocked = word | (letter - 1);
        let mut candidate = lowest_clear_bit(blocked);
        while candidate != 0 && candidate <= last_start {
            if candidate & blocked == 0 {
                for &second in index.bucket(candidate) {
                    if word & second == 0 {
                        pairs.entry(word | second).or_default().push(word);
                    }
                }
            }
            candidate <<= 1;
        }
    }
    pairs
}
