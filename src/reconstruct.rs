//! Turning quads back into words.

use crate::bits::{letters, ALL_LETTERS};
use crate::catalog::WordCatalog;
use crate::pairs::PairBitsets;
use crate::solver::Quad;
use itertools::Itertools;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::fmt;

/// Five words, alphabetized, together using 25 distinct letters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Solution(Vec<String>);

impl Solution {
    fn new<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Solution(words.into_iter().map(str::to_owned).sorted().collect())
    }

    pub fn words(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// Words that fit in the six letters left over by the 20-letter `used`.
pub fn fifth_words(catalog: &WordCatalog, used: u32) -> impl Iterator<Item = &str> {
    let available = used ^ ALL_LETTERS;
    letters(available)
        .map(move |skipped| available & !skipped)
        .filter(move |&mask| catalog.contains(mask))
        .flat_map(move |mask| catalog.words(mask))
}

pub fn has_fifth_word(catalog: &WordCatalog, used: u32) -> bool {
    fifth_words(catalog, used).next().is_some()
}

/// Every word-level solution a quad stands for.
///
/// Each pair mask may come from several word pairs, each word mask may be
/// spelled by several anagrams, and several fifth words may fit.
pub fn reconstruct(
    catalog: &WordCatalog,
    pairs: &PairBitsets,
    (first, second): Quad,
) -> Vec<Solution> {
    let fifth = fifth_words(catalog, first | second).collect_vec();
    if fifth.is_empty() {
        return Vec::new();
    }

    pairs
        .word_pairs(first)
        .cartesian_product(pairs.word_pairs(second))
        .flat_map(|((a, b), (c, d))| {
            [a, b, c, d]
                .into_iter()
                .map(|mask| catalog.words(mask).collect_vec())
                .chain([fifth.clone()])
                .multi_cartesian_product()
                .map(Solution::new)
        })
        .collect()
}

/// Reconstruct every quad and merge the results.
pub fn reconstruct_all<'a>(
    catalog: &WordCatalog,
    pairs: &PairBitsets,
    quads: impl IntoParallelIterator<Item = &'a Quad>,
) -> BTreeSet<Solution> {
    quads
        .into_par_iter()
        .flat_map_iter(|&quad| reconstruct(catalog, pairs, quad))
        .collect()
}
