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

//! # Figurate Numbers
//!
//! Triangle, pentagonal, and hexagonal numbers, with exact membership tests.
//!
//! Each membership test inverts the defining quadratic: `x` is figurate
//! exactly when the discriminant is a perfect square and the recovered index
//! is a positive integer. `exact_isqrt` does both checks at once.

use crate::arith::exact_isqrt;

/// Returns the `n`-th triangle number `n * (n + 1) / 2`.
#[inline]
pub fn triangle(n: u64) -> u64 {
    n * (n + 1) / 2
}

/// Returns the `n`-th pentagonal number `n * (3n - 1) / 2`.
#[inline]
pub fn pentagonal(n: u64) -> u64 {
    n * (3 * n - 1) / 2
}

/// Returns the `n`-th hexagonal number `n * (2n - 1)`.
#[inline]
pub fn hexagonal(n: u64) -> u64 {
    n * (2 * n - 1)
}

/// Tests whether `x` is a triangle number.
///
/// `T_n = x` solves to `n = (sqrt(8x + 1) - 1) / 2`, so `x` qualifies when
/// `8x + 1` is an odd perfect square.
///
/// # Examples
///
/// ```rust
/// # use euler_core::figurate::is_triangle;
/// assert!(is_triangle(55)); // the word value of SKY
/// assert!(!is_triangle(56));
/// ```
#[inline]
pub fn is_triangle(x: u64) -> bool {
    match exact_isqrt(8 * x + 1) {
        Some(r) => r % 2 == 1 && x > 0,
        None => false,
    }
}

/// Tests whether `x` is a pentagonal number.
///
/// # Examples
///
/// ```rust
/// # use euler_core::figurate::is_pentagonal;
/// assert!(is_pentagonal(92)); // P4 + P7 = 22 + 70
/// assert!(!is_pentagonal(48)); // P7 - P4
/// ```
#[inline]
pub fn is_pentagonal(x: u64) -> bool {
    match exact_isqrt(24 * x + 1) {
        Some(r) => (r + 1) % 6 == 0,
        None => false,
    }
}

/// Tests whether `x` is a hexagonal number.
///
/// # Examples
///
/// ```rust
/// # use euler_core::figurate::is_hexagonal;
/// assert!(is_hexagonal(40_755));
/// assert!(!is_hexagonal(40_754));
/// ```
#[inline]
pub fn is_hexagonal(x: u64) -> bool {
    match exact_isqrt(8 * x + 1) {
        Some(r) => (r + 1) % 4 == 0,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_sequence_prefix() {
        let prefix: Vec<u64> = (1..=10).map(triangle).collect();
        assert_eq!(prefix, vec![1, 3, 6, 10, 15, 21, 28, 36, 45, 55]);
    }

    #[test]
    fn test_pentagonal_sequence_prefix() {
        let prefix: Vec<u64> = (1..=10).map(pentagonal).collect();
        assert_eq!(prefix, vec![1, 5, 12, 22, 35, 51, 70, 92, 117, 145]);
    }

    #[test]
    fn test_hexagonal_sequence_prefix() {
        let prefix: Vec<u64> = (1..=5).map(hexagonal).collect();
        assert_eq!(prefix, vec![1, 6, 15, 28, 45]);
    }

    #[test]
    fn test_membership_agrees_with_generation() {
        let triangles: Vec<u64> = (1..200).map(triangle).collect();
        let pentagonals: Vec<u64> = (1..200).map(pentagonal).collect();
        let hexagonals: Vec<u64> = (1..200).map(hexagonal).collect();
        for x in 1..=hexagonal(199) {
            assert_eq!(is_triangle(x), triangles.binary_search(&x).is_ok());
            assert_eq!(is_pentagonal(x), pentagonals.binary_search(&x).is_ok());
            assert_eq!(is_hexagonal(x), hexagonals.binary_search(&x).is_ok());
        }
    }

    #[test]
    fn test_zero_is_not_figurate() {
        assert!(!is_triangle(0));
        assert!(!is_pentagonal(0));
        assert!(!is_hexagonal(0));
    }

    #[test]
    fn test_shared_triangle_pentagonal_hexagonal_value() {
        // T285 = P165 = H143 = 40755.
        assert_eq!(triangle(285), 40_755);
        assert_eq!(pentagonal(165), 40_755);
        assert_eq!(hexagonal(143), 40_755);
        assert!(is_triangle(40_755) && is_pentagonal(40_755) && is_hexagonal(40_755));
    }
}
