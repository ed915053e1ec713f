//! Finding pairs of pairs that leave room for a fifth word.
//!
//! A solution uses 25 letters, so exactly one letter is missing. Every
//! solution is two pairs plus a leftover word, and the second pair may be any
//! two of the three words left once the first pair is chosen. So once two
//! letters are known to be in those three words, some pair starting with
//! exactly those two letters completes the quad. Which two letters that is
//! depends on where the missing letter sits, giving five scenarios.

use crate::bits::{lowest_bit, lowest_clear_bit, ALL_LETTERS, LETTER_A, LETTER_B, LETTER_C};
use crate::index::PairSignatureIndex;
use crate::solution_masks::SolutionMaskSet;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Two disjoint pair masks, smaller first.
pub type Quad = (u32, u32);

/// Where the missing letter of a solution is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// `a` is missing; the first pair starts `b`, `c`.
    MissingA,
    /// `b` is missing; the first pair starts `a`, `c`.
    MissingB,
    /// The first pair starts `a`, `b` and the missing letter is the first one
    /// it doesn't have.
    MissingFirstFree,
    /// As above, but the second letter it doesn't have.
    MissingSecondFree,
    /// As above, any later letter.
    MissingLater,
}

impl Scenario {
    pub const ALL: [Scenario; 5] = [
        Scenario::MissingA,
        Scenario::MissingB,
        Scenario::MissingFirstFree,
        Scenario::MissingSecondFree,
        Scenario::MissingLater,
    ];

    /// Leading letters of the first pair.
    pub fn first_letters(self) -> (u32, u32) {
        match self {
            Scenario::MissingA => (LETTER_B, LETTER_C),
            Scenario::MissingB => (LETTER_A, LETTER_C),
            _ => (LETTER_A, LETTER_B),
        }
    }

    /// Leading letters of the second pair, given the first.
    pub fn second_letters(self, first: u32) -> (u32, u32) {
        match self {
            Scenario::MissingA => {
                let [x, y] = free_letters(first | LETTER_A);
                (x, y)
            }
            Scenario::MissingB => {
                let [x, y] = free_letters(first | LETTER_B);
                (x, y)
            }
            _ => {
                let [x, y, z] = free_letters(first);
                match self {
                    Scenario::MissingFirstFree => (y, z),
                    Scenario::MissingSecondFree => (x, z),
                    _ => (x, y),
                }
            }
        }
    }

    /// Quads found by this scenario, keeping only second pairs whose earliest
    /// letter is in `second_leads`.
    pub fn quads<'a>(
        self,
        pairs: &'a PairSignatureIndex,
        solution_masks: &'a SolutionMaskSet,
        second_leads: u32,
    ) -> impl ParallelIterator<Item = Quad> + 'a {
        let (a, b) = self.first_letters();
        pairs.bucket(a, b).par_iter().flat_map_iter(move |&first| {
            let (x, y) = self.second_letters(first);
            pairs.bucket(x, y).iter().filter_map(move |&second| {
                let fits = lowest_bit(second) & second_leads != 0
                    && first & second == 0
                    && solution_masks.contains(first | second);
                fits.then(|| quad(first, second))
            })
        })
    }
}

/// The first `N` letters not in `mask`.
fn free_letters<const N: usize>(mut mask: u32) -> [u32; N] {
    let mut free = [0; N];
    for letter in &mut free {
        *letter = lowest_clear_bit(mask);
        mask |= *letter;
    }
    free
}

fn quad(a: u32, b: u32) -> Quad {
    (a.min(b), a.max(b))
}

/// Run all five scenarios and collect the distinct quads.
pub fn solve(pairs: &PairSignatureIndex, solution_masks: &SolutionMaskSet) -> FxHashSet<Quad> {
    solve_for_leading_letters(pairs, solution_masks, ALL_LETTERS)
}

/// As [`solve`] but only for quads whose second pair starts with a letter in
/// `second_leads`.
pub fn solve_for_leading_letters(
    pairs: &PairSignatureIndex,
    solution_masks: &SolutionMaskSet,
    second_leads: u32,
) -> FxHashSet<Quad> {
    Scenario::ALL
        .par_iter()
        .flat_map_iter(|&scenario| {
            let quads: Vec<Quad> = scenario.quads(pairs, solution_masks, second_leads).collect();
            debug!(?scenario, quads = quads.len(), "scenario finished");
            quads
        })
        .collect()
}
