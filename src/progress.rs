//! Reporting how far the search has got.

use crate::bits::mask_letters;
use std::fmt;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Loading,
    Indexing,
    SolutionMasks,
    Pairing,
    PairIndexing,
    Solving,
    Reconstructing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Loading => "loading",
            Stage::Indexing => "indexing",
            Stage::SolutionMasks => "solution masks",
            Stage::Pairing => "pairing",
            Stage::PairIndexing => "pair indexing",
            Stage::Solving => "solving",
            Stage::Reconstructing => "reconstructing",
        };
        f.write_str(name)
    }
}

/// Receives progress notifications. Has no influence on the results.
pub trait Progress: Sync {
    fn stage_started(&self, _stage: Stage) {}

    /// `count` is what the stage produced: words, starting letters, masks,
    /// word pairs, indexed pairs, quads or solutions.
    fn stage_finished(&self, _stage: Stage, _count: usize) {}

    /// A new range of leading letters, `index` counting from zero.
    fn shard_started(&self, _index: usize, _total: usize, _leads: u32) {}
}

/// Ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Progress for Silent {}

/// Logs every notification through `tracing`.
#[derive(Debug, Clone, Copy)]
pub struct Logged {
    start: Instant,
}

impl Logged {
    pub fn new() -> Self {
        Logged {
            start: Instant::now(),
        }
    }
}

impl Default for Logged {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for Logged {
    fn stage_started(&self, stage: Stage) {
        tracing::debug!(%stage, "started");
    }

    fn stage_finished(&self, stage: Stage, count: usize) {
        let elapsed = self.start.elapsed();
        match stage {
            Stage::Loading => info!(?elapsed, "Loaded {count} words"),
            Stage::Indexing => info!(?elapsed, "with {count} starting letters"),
            Stage::SolutionMasks => info!(?elapsed, "Built {count} solution masks"),
            Stage::Pairing => info!(?elapsed, "Found {count} unique pairs"),
            Stage::PairIndexing => info!(?elapsed, "Indexed {count} pair masks"),
            Stage::Solving => info!(?elapsed, "Found {count} quads"),
            Stage::Reconstructing => info!(?elapsed, "Found {count} solutions"),
        }
    }

    fn shard_started(&self, index: usize, total: usize, leads: u32) {
        if total > 1 {
            info!("Shard {}/{} with leading letters {}", index + 1, total, mask_letters(leads));
        }
    }
}
