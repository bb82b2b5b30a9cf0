//! Modulo-10 check digit.
//!
//! Digits at even positions (1-based, counting from the left of the 12
//! supplied digits) are weighted 3, odd positions 1. The check digit is
//! whatever brings the weighted sum up to the next multiple of 10.
//!
//! ```text
//! 9 7 8 2 7 2 3 4 9 9 7 1
//! odd  = 9+8+7+3+9+7 = 43
//! even = 7+2+2+4+9+1 = 25
//! 3*25 + 43 = 118  ->  120 - 118 = 2
//! ```

/// Compute the check digit for a sequence of digit values (each 0-9).
pub fn compute(digits: &[u8]) -> u8 {
    let (even, odd) = digits
        .iter()
        .enumerate()
        .fold((0u32, 0u32), |(even, odd), (i, &d)| {
            // i is 0-based, so i = 1 is position 2
            if i % 2 == 1 {
                (even + d as u32, odd)
            } else {
                (even, odd + d as u32)
            }
        });

    let weighted = 3 * even + odd;
    let next_ten = weighted.div_ceil(10) * 10;
    (next_ten - weighted) as u8
}

/// Compute the check digit for a string of ASCII digits.
///
/// Returns `None` if any character is not `0`-`9`.
pub fn compute_str(code: &str) -> Option<u8> {
    let digits = code
        .chars()
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect::<Option<Vec<u8>>>()?;
    Some(compute(&digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(compute_str("978272349971"), Some(2));
        assert_eq!(compute_str("000000000000"), Some(0));
        assert_eq!(compute_str("400638133393"), Some(1));
        assert_eq!(compute_str("590123412345"), Some(7));
    }

    #[test]
    fn test_multiple_of_ten_gives_zero() {
        // 3*0 + 1+9 = 10
        assert_eq!(compute(&[1, 0, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0]), 0);
    }

    #[test]
    fn test_range_and_idempotence() {
        let mut digits = [0u8; 12];
        for seed in 0..2000u32 {
            let mut s = seed.wrapping_mul(2654435761);
            for d in digits.iter_mut() {
                s = s.wrapping_mul(1103515245).wrapping_add(12345);
                *d = ((s >> 16) % 10) as u8;
            }
            let first = compute(&digits);
            assert!(first <= 9);
            assert_eq!(compute(&digits), first);
        }
    }

    #[test]
    fn test_non_digit_rejected() {
        assert_eq!(compute_str("97827234997X"), None);
    }
}
