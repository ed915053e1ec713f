//! The whole search, from dictionary to solutions.

use crate::bits::{LETTER_A, LETTER_B};
use crate::catalog::WordCatalog;
use crate::error::Result;
use crate::index::{LeadingLetterIndex, PairSignatureIndex};
use crate::pairs::PairBitsets;
use crate::progress::{Progress, Stage};
use crate::reconstruct::{reconstruct_all, Solution};
use crate::shard::Shard;
use crate::solution_masks::SolutionMaskSet;
use crate::solver::solve_for_leading_letters;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info};

/// Every first pair the solver looks at starts with `a` or `b`, so these
/// pairs are kept for every shard.
const FIRST_PAIR_LEADS: u32 = LETTER_A | LETTER_B;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Keep every anagram, or only the alphabetically first per letter set.
    pub anagrams: bool,
    pub shard: Shard,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            anagrams: true,
            shard: Shard::default(),
        }
    }
}

/// Load the dictionary at `path` and search it.
pub fn run(
    path: impl AsRef<Path>,
    options: &SearchOptions,
    progress: &dyn Progress,
) -> Result<BTreeSet<Solution>> {
    progress.stage_started(Stage::Loading);
    let catalog = WordCatalog::from_path(path, options.anagrams)?;
    progress.stage_finished(Stage::Loading, catalog.word_count());
    Ok(search(&catalog, &options.shard, progress))
}

/// Find every solution in `catalog`.
///
/// Pairs are generated, indexed and solved one shard range at a time; the
/// pairs starting with `a` or `b` are kept throughout and the rest dropped
/// after each range.
pub fn search(catalog: &WordCatalog, shard: &Shard, progress: &dyn Progress) -> BTreeSet<Solution> {
    progress.stage_started(Stage::Indexing);
    let word_index = LeadingLetterIndex::new(catalog.masks());
    progress.stage_finished(Stage::Indexing, word_index.len());

    progress.stage_started(Stage::SolutionMasks);
    let solution_masks = SolutionMaskSet::new(catalog);
    progress.stage_finished(Stage::SolutionMasks, solution_masks.len());

    let mut pairs = PairBitsets::with_leading_letters(&word_index, FIRST_PAIR_LEADS);
    let mut solutions = BTreeSet::new();

    let ranges = shard.ranges();
    if shard.is_sharded() {
        info!(%shard, ranges = ranges.len(), "pairing split by leading letter");
    }
    for (i, &leads) in ranges.iter().enumerate() {
        progress.shard_started(i, ranges.len(), leads);

        progress.stage_started(Stage::Pairing);
        pairs.absorb(PairBitsets::with_leading_letters(
            &word_index,
            leads & !FIRST_PAIR_LEADS,
        ));
        progress.stage_finished(Stage::Pairing, pairs.pair_count());

        progress.stage_started(Stage::PairIndexing);
        let pair_index = PairSignatureIndex::new(pairs.masks());
        progress.stage_finished(Stage::PairIndexing, pair_index.len());

        progress.stage_started(Stage::Solving);
        let quads = solve_for_leading_letters(&pair_index, &solution_masks, leads);
        drop(pair_index);
        progress.stage_finished(Stage::Solving, quads.len());

        progress.stage_started(Stage::Reconstructing);
        solutions.extend(reconstruct_all(catalog, &pairs, &quads));
        progress.stage_finished(Stage::Reconstructing, solutions.len());

        pairs.retain_leading_letters(FIRST_PAIR_LEADS);
        debug!(kept = pairs.len(), "dropped shard pairs");
    }

    solutions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::Silent;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        finished: Mutex<Vec<(Stage, usize)>>,
        shards: Mutex<Vec<u32>>,
    }

    impl Progress for Recorder {
        fn stage_finished(&self, stage: Stage, count: usize) {
            self.finished.lock().unwrap().push((stage, count));
        }

        fn shard_started(&self, _index: usize, _total: usize, leads: u32) {
            self.shards.lock().unwrap().push(leads);
        }
    }

    const WORDS: [&str; 7] = ["abcde", "fghij", "klmno", "pqrst", "uvwxy", "vwxyz", "xyz"];

    #[test]
    fn test_progress_reports() {
        let catalog = WordCatalog::from_lines(WORDS, true);
        let recorder = Recorder::default();
        let solutions = search(&catalog, &Shard::default(), &recorder);
        assert_eq!(solutions.len(), 2);

        let finished = recorder.finished.into_inner().unwrap();
        assert_eq!(finished[0], (Stage::Indexing, 6));
        assert_eq!(finished.last(), Some(&(Stage::Reconstructing, 2)));
        assert_eq!(recorder.shards.into_inner().unwrap().len(), 1);
    }

    #[test]
    fn test_sharded_search_matches() {
        let catalog = WordCatalog::from_lines(WORDS, true);
        let unsharded = search(&catalog, &Shard::default(), &Silent);
        for letters in ["b", "c", "fk", "etoins", "bcdefghijklmnopqrstuvwxyz"] {
            let shard = Shard::new(letters).unwrap();
            assert_eq!(search(&catalog, &shard, &Silent), unsharded, "shard {letters}");
        }
    }

    #[test]
    fn test_run_missing_file() {
        assert!(run("/nonexistent/words.txt", &SearchOptions::default(), &Silent).is_err());
    }
}
