//! Dictionary words grouped by letter mask.

use crate::bits::word_mask;
use crate::error::{Error, Result};
use itertools::Itertools;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Length every usable word must have.
pub const WORD_LEN: usize = 5;

/// Map from word mask to the literal words spelled with exactly those letters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordCatalog {
    words: FxHashMap<u32, BTreeSet<String>>,
}

impl WordCatalog {
    /// Build a catalog from dictionary lines.
    ///
    /// Lines are trimmed and lowercased. Anything that isn't five distinct
    /// letters is skipped. With `anagrams` off, each mask keeps only its
    /// alphabetically first word.
    pub fn from_lines<I, S>(lines: I, anagrams: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: FxHashMap<u32, BTreeSet<String>> = FxHashMap::default();
        for line in lines {
            let word = line.as_ref().trim().to_lowercase();
            if word.len() != WORD_LEN {
                continue;
            }
            if let Some(mask) = word_mask(&word) {
                words.entry(mask).or_default().insert(word);
            }
        }

        if !anagrams {
            for group in words.values_mut() {
                if let Some(first) = group.pop_first() {
                    *group = BTreeSet::from([first]);
                }
            }
        }

        WordCatalog { words }
    }

    /// Read a dictionary file, one word per line.
    pub fn from_path(path: impl AsRef<Path>, anagrams: bool) -> Result<Self> {
        let path = path.as_ref();
        let file = BufReader::new(File::open(path).map_err(|e| Error::io(path, e))?);
        let lines: Vec<String> = file
            .lines()
            .try_collect()
            .map_err(|e| Error::io(path, e))?;
        Ok(Self::from_lines(lines, anagrams))
    }

    /// Number of distinct masks.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of literal words across all masks.
    pub fn word_count(&self) -> usize {
        self.words.values().map(BTreeSet::len).sum()
    }

    pub fn contains(&self, mask: u32) -> bool {
        self.words.contains_key(&mask)
    }

    /// Words spelled by `mask`, empty if there are none.
    pub fn words(&self, mask: u32) -> impl Iterator<Item = &str> + Clone {
        self.words
            .get(&mask)
            .into_iter()
            .flat_map(|group| group.iter().map(String::as_str))
    }

    pub fn masks(&self) -> impl Iterator<Item = u32> + '_ {
        self.words.keys().copied()
    }
}
