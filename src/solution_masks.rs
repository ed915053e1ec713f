use crate::bits::{letters, ALL_LETTERS};
use crate::catalog::WordCatalog;
use rustc_hash::FxHashSet;

/// Every 20-letter mask whose six missing letters hold some word.
///
/// Built by taking each word plus one letter it lacks and complementing.
#[derive(Debug, Default, Clone)]
pub struct SolutionMaskSet {
    masks: FxHashSet<u32>,
}

impl SolutionMaskSet {
    pub fn new(catalog: &WordCatalog) -> Self {
        let masks = catalog
            .masks()
            .flat_map(|word| {
                letters(ALL_LETTERS & !word).map(move |extra| (word | extra) ^ ALL_LETTERS)
            })
            .collect();
        SolutionMaskSet { masks }
    }

    pub fn contains(&self, quad: u32) -> bool {
        self.masks.contains(&quad)
    }

    pub fn len(&self) -> usize {
        self.masks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::word_mask;

    #[test]
    fn test_solution_masks() {
        let catalog = WordCatalog::from_lines(["uvwxy"], true);
        let masks = SolutionMaskSet::new(&catalog);
        assert_eq!(masks.len(), 21);
        assert!(masks.contains(word_mask("abcdefghijklmnopqrst").unwrap()));
        assert!(masks.contains(word_mask("bcdefghijklmnopqrstz").unwrap()));
        assert!(!masks.contains(word_mask("abcdefghijklmnopqrsu").unwrap()));
        for quad in masks.masks.iter() {
            assert_eq!(quad.count_ones(), 20);
        }
    }

    #[test]
    fn test_empty_catalog() {
        assert!(SolutionMaskSet::new(&WordCatalog::default()).is_empty());
    }
}
