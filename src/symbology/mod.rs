//! # EAN-13 Symbology
//!
//! Turns a 12-digit product code into its check digit and the module widths
//! of the two halves of the symbol.
//!
//! ## Module Structure
//!
//! - [`tables`]: digit patterns for parity sets A, B and C
//! - [`check_digit`]: modulo-10 check digit
//!
//! ## Usage Example
//!
//! ```
//! use ean13_tikz::symbology::Ean13;
//!
//! let code = Ean13::new("978272349971")?;
//! assert_eq!(code.check_digit(), 2);
//! assert_eq!(code.to_string(), "9 782723 499712");
//!
//! let encoded = code.encode();
//! assert_eq!(encoded.left.to_string().len(), 24);
//! # Ok::<(), ean13_tikz::error::ValidationError>(())
//! ```

pub mod check_digit;
pub mod tables;

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use tables::{DigitPattern, ParitySet};

/// Number of digits supplied by the caller (the 13th is computed).
pub const CODE_LEN: usize = 12;

/// Digits per half of the symbol.
pub const HALF_DIGITS: usize = 6;

/// Module-width entries per half (6 digits × 4 elements).
pub const HALF_LEN: usize = HALF_DIGITS * 4;

// ============================================================================
// PRODUCT CODE
// ============================================================================

/// Twelve validated decimal digits: number system digit + 11 payload digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductCode([u8; CODE_LEN]);

impl ProductCode {
    /// Parse and validate a 12-digit code.
    pub fn parse(code: &str) -> Result<Self, ValidationError> {
        let count = code.chars().count();
        if count != CODE_LEN {
            return Err(ValidationError::InvalidLength {
                expected: CODE_LEN,
                actual: count,
            });
        }

        let mut digits = [0u8; CODE_LEN];
        for (i, c) in code.chars().enumerate() {
            digits[i] = c.to_digit(10).ok_or(ValidationError::InvalidDigit {
                position: i + 1,
                character: c,
            })? as u8;
        }
        Ok(Self(digits))
    }

    /// Digit values, each 0-9.
    pub fn digits(&self) -> &[u8; CODE_LEN] {
        &self.0
    }

    /// Number system digit, encoded through the left-half parity mix.
    pub fn first_digit(&self) -> u8 {
        self.0[0]
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

// ============================================================================
// HALF PATTERN
// ============================================================================

/// Module widths for one half of the symbol (24 entries, each 1-4).
///
/// Displays as the width digits concatenated, e.g. `"3211222121..."`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfPattern([u8; HALF_LEN]);

impl HalfPattern {
    fn from_digits(patterns: impl Iterator<Item = DigitPattern>) -> Self {
        let mut widths = [0u8; HALF_LEN];
        for (chunk, pattern) in widths.chunks_exact_mut(4).zip(patterns) {
            chunk.copy_from_slice(&pattern);
        }
        Self(widths)
    }

    /// Module widths in drawing order.
    pub fn widths(&self) -> &[u8; HALF_LEN] {
        &self.0
    }

    /// Total width of this half in modules (always 42).
    pub fn modules(&self) -> u32 {
        self.0.iter().map(|&w| w as u32).sum()
    }
}

impl fmt::Display for HalfPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for w in self.0 {
            write!(f, "{}", w)?;
        }
        Ok(())
    }
}

/// Both halves of an encoded symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoded {
    pub left: HalfPattern,
    pub right: HalfPattern,
}

// ============================================================================
// BARCODE
// ============================================================================

/// An EAN-13 barcode: product code plus its computed check digit.
///
/// The module patterns are derived on demand by [`Ean13::encode`]; only the
/// check digit is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ean13 {
    code: ProductCode,
    check_digit: u8,
}

impl Ean13 {
    /// Validate `code` (exactly 12 digits) and compute its check digit.
    pub fn new(code: &str) -> Result<Self, ValidationError> {
        let code = ProductCode::parse(code)?;
        Ok(Self::from_code(code))
    }

    /// Build from an already validated product code.
    pub fn from_code(code: ProductCode) -> Self {
        let check_digit = check_digit::compute(code.digits());
        tracing::debug!(%code, check_digit, "computed EAN-13 check digit");
        Self { code, check_digit }
    }

    pub fn code(&self) -> &ProductCode {
        &self.code
    }

    pub fn check_digit(&self) -> u8 {
        self.check_digit
    }

    /// All 13 digits, check digit last.
    pub fn full_digits(&self) -> [u8; CODE_LEN + 1] {
        let mut all = [0u8; CODE_LEN + 1];
        all[..CODE_LEN].copy_from_slice(self.code.digits());
        all[CODE_LEN] = self.check_digit;
        all
    }

    /// The 13-digit code as a plain string, e.g. `"9782723499712"`.
    pub fn full_code(&self) -> String {
        format!("{}{}", self.code, self.check_digit)
    }

    /// Encode both halves of the symbol.
    ///
    /// The left half takes digits 2-7 through the parity sets selected by
    /// the first digit. The right half takes digits 8-12 and the check
    /// digit, all through set C.
    pub fn encode(&self) -> Encoded {
        let digits = self.full_digits();
        let parity = tables::left_parity(self.code.first_digit());

        let left = HalfPattern::from_digits(
            parity
                .iter()
                .zip(&digits[1..=HALF_DIGITS])
                .map(|(set, &d)| set.pattern(d)),
        );
        let right = HalfPattern::from_digits(
            digits[HALF_DIGITS + 1..]
                .iter()
                .map(|&d| ParitySet::C.pattern(d)),
        );

        Encoded { left, right }
    }
}

/// Human-readable form: `<first> <digits 2-7> <digits 8-12><check>`.
impl fmt::Display for Ean13 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.full_digits();
        write!(f, "{} ", d[0])?;
        for x in &d[1..=HALF_DIGITS] {
            write!(f, "{}", x)?;
        }
        f.write_str(" ")?;
        for x in &d[HALF_DIGITS + 1..] {
            write!(f, "{}", x)?;
        }
        Ok(())
    }
}

impl FromStr for Ean13 {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Ean13 {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_computes_check_digit() {
        let code = Ean13::new("978272349971").unwrap();
        assert_eq!(code.check_digit(), 2);
        assert_eq!(code.full_code(), "9782723499712");

        let zeros = Ean13::new("000000000000").unwrap();
        assert_eq!(zeros.check_digit(), 0);
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(
            Ean13::new("97827234997"),
            Err(ValidationError::InvalidLength {
                expected: 12,
                actual: 11
            })
        );
        assert_eq!(
            Ean13::new("9782723499712"),
            Err(ValidationError::InvalidLength {
                expected: 12,
                actual: 13
            })
        );
        assert!(Ean13::new("").is_err());
    }

    #[test]
    fn test_rejects_non_digit() {
        assert_eq!(
            Ean13::new("97827234997X"),
            Err(ValidationError::InvalidDigit {
                position: 12,
                character: 'X'
            })
        );
        assert!(Ean13::new("9782 2349971").is_err());
        // Non-ASCII digits are not decimal digits for EAN purposes
        assert!(Ean13::new("97827234997٣").is_err());
    }

    #[test]
    fn test_display() {
        let code = Ean13::new("978272349971").unwrap();
        assert_eq!(code.to_string(), "9 782723 499712");
        assert_eq!(code.code().to_string(), "978272349971");
    }

    #[test]
    fn test_from_str() {
        let code: Ean13 = "400638133393".parse().unwrap();
        assert_eq!(code.check_digit(), 1);
        assert!(Ean13::try_from("abc").is_err());
    }

    #[test]
    fn test_encode_zeros() {
        let encoded = Ean13::new("000000000000").unwrap().encode();
        assert_eq!(encoded.left.to_string(), "3211".repeat(6));
        assert_eq!(encoded.right.to_string(), "3211".repeat(6));
    }

    #[test]
    fn test_encode_known_code() {
        // First digit 9 -> ABBABA
        let encoded = Ean13::new("978272349971").unwrap().encode();
        assert_eq!(
            encoded.left.to_string(),
            // 7:A      8:B      2:B      7:A      2:B      3:A
            "131231212212131222121411"
        );
        assert_eq!(
            encoded.right.to_string(),
            // 4        9        9        7        1        2 (check)
            "113231123112131222212122"
        );
    }

    #[test]
    fn test_halves_have_24_widths_summing_to_7_per_digit() {
        for code in ["978272349971", "000000000000", "123456789012", "999999999999"] {
            let encoded = Ean13::new(code).unwrap().encode();
            for half in [encoded.left, encoded.right] {
                let text = half.to_string();
                assert_eq!(text.len(), HALF_LEN);
                assert!(text.chars().all(|c| ('1'..='4').contains(&c)));
                for digit in half.widths().chunks(4) {
                    assert_eq!(digit.iter().sum::<u8>(), 7);
                }
                assert_eq!(half.modules(), 42);
            }
        }
    }

    #[test]
    fn test_encode_is_deterministic() {
        let code = Ean13::new("590123412345").unwrap();
        assert_eq!(code.encode(), code.encode());
    }
}
