//! Lookup tables keyed by the first letters of a mask.

use crate::bits::{lowest_bit, two_lowest_bits, LETTER_COUNT};
use std::collections::BTreeMap;

/// Word masks bucketed by their earliest letter.
///
/// Only non-empty buckets are present. Iteration goes from `a` to `z`.
#[derive(Debug, Default, Clone)]
pub struct LeadingLetterIndex {
    buckets: BTreeMap<u32, Vec<u32>>,
}

impl LeadingLetterIndex {
    pub fn new(masks: impl IntoIterator<Item = u32>) -> Self {
        let mut buckets: BTreeMap<u32, Vec<u32>> = BTreeMap::new();
        for mask in masks {
            buckets.entry(lowest_bit(mask)).or_default().push(mask);
        }
        for bucket in buckets.values_mut() {
            bucket.sort_unstable();
        }
        LeadingLetterIndex { buckets }
    }

    /// Words whose earliest letter is `letter`.
    pub fn bucket(&self, letter: u32) -> &[u32] {
        self.buckets.get(&letter).map_or(&[][..], Vec::as_slice)
    }

    /// Latest earliest-letter of any word, zero when empty.
    pub fn last_letter(&self) -> u32 {
        self.buckets.keys().next_back().copied().unwrap_or(0)
    }

    /// `(letter, words)` for every non-empty bucket, `a` first.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[u32])> {
        self.buckets.iter().map(|(&l, b)| (l, b.as_slice()))
    }

    /// Number of distinct starting letters.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Pair masks bucketed by their two earliest letters.
///
/// Every two-letter combination has a slot, so a lookup for letters nobody
/// starts with just comes back empty.
#[derive(Debug, Clone)]
pub struct PairSignatureIndex {
    buckets: Vec<Vec<u32>>,
}

const N: usize = LETTER_COUNT as usize;

fn slot(first: u32, second: u32) -> Option<usize> {
    let (i, j) = (first.trailing_zeros() as usize, second.trailing_zeros() as usize);
    (i < N && j < N).then_some(i * N + j)
}

impl PairSignatureIndex {
    pub fn new(pairs: impl IntoIterator<Item = u32>) -> Self {
        let mut buckets = vec![Vec::new(); N * N];
        for pair in pairs {
            let (first, second) = two_lowest_bits(pair);
            if let Some(i) = slot(first, second) {
                buckets[i].push(pair);
            }
        }
        for bucket in &mut buckets {
            bucket.sort_unstable();
        }
        PairSignatureIndex { buckets }
    }

    /// Pairs whose two earliest letters are exactly `first` and `second`,
    /// given as single-letter bits with `first < second`.
    pub fn bucket(&self, first: u32, second: u32) -> &[u32] {
        slot(first, second)
            .and_then(|i| self.buckets.get(i))
            .map_or(&[][..], Vec::as_slice)
    }

    /// Total number of indexed pairs.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}
