//! # EAN-13 Encoding Tables
//!
//! Each digit is drawn as four alternating elements (space/bar or bar/space)
//! whose widths, in modules, always sum to 7.
//!
//! | Table | Used for | First element |
//! |-------|----------|---------------|
//! | A | left half, odd parity | space |
//! | B | left half, even parity | space |
//! | C | right half | bar |
//!
//! Sets A and C share the same width sequence; what differs is the colour
//! of the first element, which the renderer handles. The number-system
//! digit is never drawn: it is carried by the A/B mix of the left half,
//! looked up in [`FIRST_DIGIT_PARITY`].

/// One of the three digit-encoding tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParitySet {
    A,
    B,
    C,
}

/// Module widths of one encoded digit.
pub type DigitPattern = [u8; 4];

const SET_A: [DigitPattern; 10] = [
    [3, 2, 1, 1],
    [2, 2, 2, 1],
    [2, 1, 2, 2],
    [1, 4, 1, 1],
    [1, 1, 3, 2],
    [1, 2, 3, 1],
    [1, 1, 1, 4],
    [1, 3, 1, 2],
    [1, 2, 1, 3],
    [3, 1, 1, 2],
];

const SET_B: [DigitPattern; 10] = [
    [1, 1, 2, 3],
    [1, 2, 2, 2],
    [2, 2, 1, 2],
    [1, 1, 4, 1],
    [2, 3, 1, 1],
    [1, 3, 2, 1],
    [4, 1, 1, 1],
    [2, 1, 3, 1],
    [3, 1, 2, 1],
    [2, 1, 1, 3],
];

const SET_C: [DigitPattern; 10] = SET_A;

use ParitySet::{A, B};

/// Left-half parity sets, indexed by the number-system (first) digit.
pub const FIRST_DIGIT_PARITY: [[ParitySet; 6]; 10] = [
    [A, A, A, A, A, A],
    [A, A, B, A, B, B],
    [A, A, B, B, A, B],
    [A, A, B, B, B, A],
    [A, B, A, A, B, B],
    [A, B, B, A, A, B],
    [A, B, B, B, A, A],
    [A, B, A, B, A, B],
    [A, B, A, B, B, A],
    [A, B, B, A, B, A],
];

impl ParitySet {
    /// The full 10-entry table for this set.
    pub const fn table(self) -> &'static [DigitPattern; 10] {
        match self {
            ParitySet::A => &SET_A,
            ParitySet::B => &SET_B,
            ParitySet::C => &SET_C,
        }
    }

    /// Module widths for `digit`.
    ///
    /// # Panics
    ///
    /// Panics if `digit > 9`. Callers get digits from a validated
    /// [`ProductCode`](super::ProductCode), which guarantees the range.
    #[inline]
    pub fn pattern(self, digit: u8) -> DigitPattern {
        self.table()[digit as usize]
    }
}

/// Parity sets for the six left-half digits, given the first digit.
#[inline]
pub fn left_parity(first_digit: u8) -> &'static [ParitySet; 6] {
    &FIRST_DIGIT_PARITY[first_digit as usize]
}
