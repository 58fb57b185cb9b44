// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Base-10 Digit Utilities
//!
//! Digit extraction and the digit predicates the puzzle searches lean on:
//! palindromes, unique-digit checks, pandigital checks, and a multiset
//! signature for "same digits in a different order" comparisons.
//!
//! Digit buffers are `SmallVec`-backed; no `u64` has more than twenty
//! digits, so extraction never touches the heap.

use num_bigint::BigUint;
use smallvec::SmallVec;

/// A stack-allocated buffer of base-10 digits.
pub type DigitBuf = SmallVec<[u8; 20]>;

/// Returns the digits of `n`, most significant first.
///
/// # Examples
///
/// ```rust
/// # use euler_core::digits::digits;
/// assert_eq!(digits(1406).as_slice(), &[1, 4, 0, 6]);
/// assert_eq!(digits(0).as_slice(), &[0]);
/// ```
pub fn digits(n: u64) -> DigitBuf {
    let mut buf = DigitBuf::new();
    let mut n = n;
    loop {
        buf.push((n % 10) as u8);
        n /= 10;
        if n == 0 {
            break;
        }
    }
    buf.reverse();
    buf
}

/// Reassembles a number from digits given most significant first.
///
/// # Examples
///
/// ```rust
/// # use euler_core::digits::from_digits;
/// assert_eq!(from_digits(&[1, 4, 0, 6]), 1406);
/// ```
#[inline]
pub fn from_digits(ds: &[u8]) -> u64 {
    ds.iter().fold(0, |acc, &d| acc * 10 + d as u64)
}

/// Counts the base-10 digits of `n` (`0` has one digit).
#[inline]
pub fn digit_count(n: u64) -> u32 {
    if n == 0 {
        1
    } else {
        n.ilog10() + 1
    }
}

/// Sums the base-10 digits of `n`.
#[inline]
pub fn digit_sum(n: u64) -> u64 {
    let mut n = n;
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Sums the base-10 digits of an arbitrary-precision integer.
///
/// # Examples
///
/// ```rust
/// # use euler_core::digits::big_digit_sum;
/// # use num_bigint::BigUint;
/// let n = BigUint::from(2u32).pow(15);
/// assert_eq!(big_digit_sum(&n), 26); // 32768 -> 3 + 2 + 7 + 6 + 8
/// ```
pub fn big_digit_sum(n: &BigUint) -> u64 {
    n.to_radix_be(10).into_iter().map(u64::from).sum()
}

/// Tests whether the decimal representation of `n` is a palindrome.
///
/// # Examples
///
/// ```rust
/// # use euler_core::digits::is_palindrome;
/// assert!(is_palindrome(9009));
/// assert!(is_palindrome(3));
/// assert!(!is_palindrome(10));
/// ```
pub fn is_palindrome(n: u64) -> bool {
    let ds = digits(n);
    ds.iter().eq(ds.iter().rev())
}

/// Tests whether a byte slice reads the same forwards and backwards.
///
/// Used for representations [`is_palindrome`] cannot cover, such as binary
/// expansions.
#[inline]
pub fn is_palindromic_slice(bytes: &[u8]) -> bool {
    bytes.iter().eq(bytes.iter().rev())
}

/// Tests whether no digit of `n` repeats.
///
/// # Examples
///
/// ```rust
/// # use euler_core::digits::has_unique_digits;
/// assert!(has_unique_digits(12345));
/// assert!(!has_unique_digits(1233));
/// ```
pub fn has_unique_digits(n: u64) -> bool {
    let mut seen = 0u16;
    let mut n = n;
    loop {
        let bit = 1 << (n % 10);
        if seen & bit != 0 {
            return false;
        }
        seen |= bit;
        n /= 10;
        if n == 0 {
            return true;
        }
    }
}

/// Returns the digit bitmask of `n` when its digits are unique and nonzero,
/// `None` otherwise.
///
/// Bit `d - 1` is set for each digit `d`. Two numbers drawing from disjoint
/// digit pools can then be combined with `|`, and a full 1-to-9 pandigital
/// union equals `0x1FF`.
///
/// # Examples
///
/// ```rust
/// # use euler_core::digits::unique_nonzero_digit_mask;
/// assert_eq!(unique_nonzero_digit_mask(39), Some(0b1_0000_0100));
/// assert_eq!(unique_nonzero_digit_mask(190), None); // contains zero
/// assert_eq!(unique_nonzero_digit_mask(33), None); // repeated digit
/// ```
pub fn unique_nonzero_digit_mask(n: u64) -> Option<u16> {
    let mut mask = 0u16;
    let mut n = n;
    loop {
        let d = n % 10;
        if d == 0 {
            return None;
        }
        let bit = 1 << (d - 1);
        if mask & bit != 0 {
            return None;
        }
        mask |= bit;
        n /= 10;
        if n == 0 {
            return Some(mask);
        }
    }
}

/// The bitmask of a full 1-to-9 pandigital digit pool.
pub const PANDIGITAL_1_TO_9: u16 = 0x1FF;

/// Tests whether `n` uses each digit 1 through 9 exactly once.
///
/// # Examples
///
/// ```rust
/// # use euler_core::digits::is_pandigital_1_to_9;
/// assert!(is_pandigital_1_to_9(918_273_645));
/// assert!(!is_pandigital_1_to_9(123_456_78));
/// ```
#[inline]
pub fn is_pandigital_1_to_9(n: u64) -> bool {
    digit_count(n) == 9 && unique_nonzero_digit_mask(n) == Some(PANDIGITAL_1_TO_9)
}

/// Returns the digit multiset of `n` as per-digit counts.
///
/// Two numbers are digit permutations of each other exactly when their
/// signatures are equal.
///
/// # Examples
///
/// ```rust
/// # use euler_core::digits::digit_signature;
/// assert_eq!(digit_signature(125_874), digit_signature(251_748));
/// assert_ne!(digit_signature(125_874), digit_signature(125_875));
/// ```
pub fn digit_signature(n: u64) -> [u8; 10] {
    let mut counts = [0u8; 10];
    let mut n = n;
    loop {
        counts[(n % 10) as usize] += 1;
        n /= 10;
        if n == 0 {
            return counts;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_round_trip() {
        for n in [0u64, 7, 10, 1406, 987_654_321, u64::MAX] {
            assert_eq!(from_digits(&digits(n)), n);
        }
    }

    #[test]
    fn test_digits_most_significant_first() {
        assert_eq!(digits(120).as_slice(), &[1, 2, 0]);
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(1_000_000), 7);
    }

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(32_768), 26);
    }

    #[test]
    fn test_big_digit_sum_of_power_of_two() {
        let n = BigUint::from(2u32).pow(10);
        assert_eq!(big_digit_sum(&n), 7); // 1024
    }

    #[test]
    fn test_palindromes() {
        assert!(is_palindrome(0));
        assert!(is_palindrome(5));
        assert!(is_palindrome(906_609));
        assert!(!is_palindrome(906_619));
    }

    #[test]
    fn test_palindromic_slice_on_binary_expansion() {
        // 585 is 1001001001 in binary, palindromic in both bases.
        let bin: Vec<u8> = format!("{:b}", 585).into_bytes();
        assert!(is_palindromic_slice(&bin));
        assert!(is_palindrome(585));
    }

    #[test]
    fn test_unique_digits() {
        assert!(has_unique_digits(0));
        assert!(has_unique_digits(9_876_543_210));
        assert!(!has_unique_digits(11));
    }

    #[test]
    fn test_unique_nonzero_digit_mask_combination() {
        // 39 * 186 = 7254 is the classic pandigital product identity.
        let a = unique_nonzero_digit_mask(39).unwrap();
        let b = unique_nonzero_digit_mask(186).unwrap();
        let c = unique_nonzero_digit_mask(7254).unwrap();
        assert_eq!(a & b, 0);
        assert_eq!(a | b | c, PANDIGITAL_1_TO_9);
    }

    #[test]
    fn test_pandigital_1_to_9() {
        assert!(is_pandigital_1_to_9(123_456_789));
        assert!(is_pandigital_1_to_9(192_384_576));
        assert!(!is_pandigital_1_to_9(112_345_678)); // repeat
        assert!(!is_pandigital_1_to_9(102_345_678)); // zero
        assert!(!is_pandigital_1_to_9(12_345_678)); // too short
    }

    #[test]
    fn test_digit_signature_detects_permutations() {
        assert_eq!(digit_signature(1487), digit_signature(4817));
        assert_eq!(digit_signature(1487), digit_signature(8147));
        assert_ne!(digit_signature(1487), digit_signature(1488));
    }
}
