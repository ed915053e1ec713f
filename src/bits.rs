//! Letter bitsets.
//!
//! Each letter `a..=z` is one bit of a `u32`, `a` being bit 0. A word with
//! five distinct letters is then a mask with five bits set, and most set
//! operations the search needs are single instructions:
//!
//! - union: `a | b`
//! - intersection: `a & b`
//! - first letter in the set: `a & a.wrapping_neg()`
//! - first letter not in the set: `(a + 1) & !a`

/// Number of letters in the alphabet.
pub const LETTER_COUNT: u32 = 26;

/// Every letter of the alphabet.
pub const ALL_LETTERS: u32 = (1 << LETTER_COUNT) - 1;

pub const LETTER_A: u32 = 1 << 0;
pub const LETTER_B: u32 = 1 << 1;
pub const LETTER_C: u32 = 1 << 2;

/// Bit for a lowercase ascii letter, `None` for anything else.
pub fn letter_bit(c: u8) -> Option<u32> {
    c.is_ascii_lowercase().then(|| 1 << (c - b'a'))
}

/// Letter for a single-letter bit.
pub fn bit_letter(bit: u32) -> char {
    debug_assert_eq!(bit.count_ones(), 1);
    char::from(b'a' + bit.trailing_zeros() as u8)
}

/// Mask of a lowercase word, `None` if it has a non-letter or a repeated letter.
pub fn word_mask(word: &str) -> Option<u32> {
    let mut mask = 0u32;
    for c in word.bytes() {
        let bit = letter_bit(c)?;
        if mask & bit != 0 {
            return None;
        }
        mask |= bit;
    }
    Some(mask)
}

/// Lowest set bit, zero for an empty mask.
#[inline]
pub fn lowest_bit(mask: u32) -> u32 {
    mask & mask.wrapping_neg()
}

/// Lowest clear bit.
#[inline]
pub fn lowest_clear_bit(mask: u32) -> u32 {
    mask.wrapping_add(1) & !mask
}

/// Lowest and second lowest set bits.
#[inline]
pub fn two_lowest_bits(mask: u32) -> (u32, u32) {
    let first = lowest_bit(mask);
    (first, lowest_bit(mask ^ first))
}

/// Iterate over the single-letter bits of a mask, lowest first.
pub fn letters(mut mask: u32) -> impl Iterator<Item = u32> {
    std::iter::from_fn(move || {
        let bit = lowest_bit(mask);
        mask ^= bit;
        (bit != 0).then_some(bit)
    })
}

/// Spell out a mask as its letters, e.g. `0b101` -> `"ac"`.
pub fn mask_letters(mask: u32) -> String {
    letters(mask).map(bit_letter).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_word_mask() {
        assert_eq!(word_mask("abcde"), Some(0b11111));
        assert_eq!(word_mask("edcba"), Some(0b11111));
        assert_eq!(word_mask("zzzzz"), None);
        assert_eq!(word_mask("aabcd"), None);
        assert_eq!(word_mask("ab-de"), None);
        assert_eq!(word_mask("azhkg"), Some(0b10_0000_0000_0000_0100_1100_0001));
    }

    #[test]
    fn test_lowest_bits() {
        assert_eq!(lowest_bit(0), 0);
        assert_eq!(lowest_bit(0b1011000), 0b1000);
        assert_eq!(lowest_clear_bit(0b1011011), 0b100);
        assert_eq!(lowest_clear_bit(ALL_LETTERS), 1 << 26);
        assert_eq!(lowest_clear_bit(u32::MAX), 0);
        assert_eq!(two_lowest_bits(0b110100), (0b100, 0b10000));
    }

    #[test]
    fn test_letters() {
        assert_eq!(letters(0).count(), 0);
        assert_eq!(letters(0b101).collect::<Vec<_>>(), [1, 4]);
        assert_eq!(mask_letters(word_mask("crwth").unwrap()), "chrtw");
        assert_eq!(bit_letter(1 << 25), 'z');
    }

    proptest! {
        #[test]
        fn lowest_bit_is_minimum_letter(mask in 1u32..=ALL_LETTERS) {
            let bit = lowest_bit(mask);
            prop_assert_eq!(bit.count_ones(), 1);
            prop_assert_eq!(bit.trailing_zeros(), mask.trailing_zeros());
        }

        #[test]
        fn lowest_clear_bit_is_minimum_missing_letter(mask in 0u32..ALL_LETTERS) {
            let bit = lowest_clear_bit(mask);
            prop_assert_eq!(bit & mask, 0);
            prop_assert_eq!(bit.trailing_zeros(), mask.trailing_ones());
        }

        #[test]
        fn letters_round_trip(mask in 0u32..=ALL_LETTERS) {
            prop_assert_eq!(letters(mask).fold(0, |acc, b| acc | b), mask);
            prop_assert_eq!(letters(mask).count() as u32, mask.count_ones());
        }
    }
}
