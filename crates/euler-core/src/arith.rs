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

//! # Integer Arithmetic
//!
//! Elementary arithmetic over machine integers: greatest common divisor,
//! least common multiple, integer square roots, modular exponentiation,
//! multiplicative order, and factorials.
//!
//! Two square-root flavors are provided. `isqrt` computes the floor of the
//! square root and always succeeds; `exact_isqrt` returns the root only when
//! the input is a perfect square, which turns "is this value of the form
//! `f(n)`?" questions (pentagonal membership, Pythagorean legs) into a cheap
//! `Option` check.

use num_bigint::BigUint;
use num_traits::{One, PrimInt, Unsigned};

/// Computes the greatest common divisor of `a` and `b` by Euclid's algorithm.
///
/// `gcd(0, 0)` is defined as `0`.
///
/// # Examples
///
/// ```rust
/// # use euler_core::arith::gcd;
/// assert_eq!(gcd(12u64, 18), 6);
/// assert_eq!(gcd(7u32, 13), 1);
/// ```
#[inline]
pub fn gcd<T>(mut a: T, mut b: T) -> T
where
    T: PrimInt + Unsigned,
{
    while b != T::zero() {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Computes the least common multiple of `a` and `b`.
///
/// Dividing before multiplying keeps intermediate values small.
///
/// # Panics
///
/// Panics on division by zero if both inputs are zero.
///
/// # Examples
///
/// ```rust
/// # use euler_core::arith::lcm;
/// assert_eq!(lcm(4u64, 6), 12);
/// ```
#[inline]
pub fn lcm<T>(a: T, b: T) -> T
where
    T: PrimInt + Unsigned,
{
    (a / gcd(a, b)) * b
}

/// Computes the floor of the square root of `n` by Newton's method.
///
/// # Examples
///
/// ```rust
/// # use euler_core::arith::isqrt;
/// assert_eq!(isqrt(0), 0);
/// assert_eq!(isqrt(15), 3);
/// assert_eq!(isqrt(16), 4);
/// ```
#[inline]
pub fn isqrt(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    // Start from a power of two at or above the true root so the first
    // average cannot overflow.
    let shift = (64 - n.leading_zeros()).div_ceil(2);
    let mut x = 1u64 << shift;
    let mut y = (x + n / x) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// Returns `Some(r)` with `r * r == n` when `n` is a perfect square,
/// `None` otherwise.
///
/// # Examples
///
/// ```rust
/// # use euler_core::arith::exact_isqrt;
/// assert_eq!(exact_isqrt(49), Some(7));
/// assert_eq!(exact_isqrt(50), None);
/// ```
#[inline]
pub fn exact_isqrt(n: u64) -> Option<u64> {
    let r = isqrt(n);
    (r * r == n).then_some(r)
}

/// Computes `base^exp mod modulus` by binary exponentiation.
///
/// Intermediate products are widened to `u128`, so any `u64` modulus is safe.
///
/// # Panics
///
/// Panics if `modulus` is zero.
///
/// # Examples
///
/// ```rust
/// # use euler_core::arith::pow_mod;
/// assert_eq!(pow_mod(2, 10, 1_000), 24);
/// assert_eq!(pow_mod(7, 0, 13), 1);
/// ```
pub fn pow_mod(base: u64, mut exp: u64, modulus: u64) -> u64 {
    assert!(modulus != 0, "pow_mod: modulus must be nonzero");
    if modulus == 1 {
        return 0;
    }
    let m = modulus as u128;
    let mut base = base as u128 % m;
    let mut result: u128 = 1;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    result as u64
}

/// The error returned by [`multiplicative_order`] when its inputs share a
/// common factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotCoprimeError {
    /// The base passed to `multiplicative_order`.
    pub base: u64,
    /// The modulus passed to `multiplicative_order`.
    pub modulus: u64,
}

impl std::fmt::Display for NotCoprimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} and {} are not coprime, so no multiplicative order exists",
            self.base, self.modulus
        )
    }
}

impl std::error::Error for NotCoprimeError {}

/// Computes the multiplicative order of `a` modulo `n`: the smallest positive
/// `k` with `a^k ≡ 1 (mod n)`.
///
/// The order exists exactly when `gcd(a, n) == 1`; otherwise a
/// [`NotCoprimeError`] is returned.
///
/// # Examples
///
/// ```rust
/// # use euler_core::arith::multiplicative_order;
/// // 1/7 has a six-digit recurring decimal cycle.
/// assert_eq!(multiplicative_order(10, 7), Ok(6));
/// assert!(multiplicative_order(10, 5).is_err());
/// ```
pub fn multiplicative_order(a: u64, n: u64) -> Result<u64, NotCoprimeError> {
    if n == 0 || gcd(a, n) != 1 {
        return Err(NotCoprimeError {
            base: a,
            modulus: n,
        });
    }
    let m = n as u128;
    let a = a as u128 % m;
    let mut acc: u128 = 1;
    for k in 1.. {
        acc = acc * a % m;
        if acc == 1 {
            return Ok(k);
        }
    }
    unreachable!("the order of a unit divides phi(n), so the loop terminates")
}

/// Computes `n!` as a `u64`.
///
/// # Panics
///
/// Panics if `n > 20` (`21!` overflows `u64`); use [`big_factorial`] beyond
/// that.
///
/// # Examples
///
/// ```rust
/// # use euler_core::arith::factorial;
/// assert_eq!(factorial(0), 1);
/// assert_eq!(factorial(10), 3_628_800);
/// ```
#[inline]
pub fn factorial(n: u32) -> u64 {
    assert!(n <= 20, "factorial: {n}! does not fit in a u64");
    (1..=n as u64).product()
}

/// Computes `n!` as a `BigUint`.
///
/// # Examples
///
/// ```rust
/// # use euler_core::arith::big_factorial;
/// # use num_bigint::BigUint;
/// assert_eq!(big_factorial(5), BigUint::from(120u32));
/// ```
pub fn big_factorial(n: u32) -> BigUint {
    let mut acc = BigUint::one();
    for i in 2..=n {
        acc *= i;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_basic_and_degenerate_cases() {
        assert_eq!(gcd(0u64, 0), 0);
        assert_eq!(gcd(0u64, 5), 5);
        assert_eq!(gcd(5u64, 0), 5);
        assert_eq!(gcd(48u64, 36), 12);
        assert_eq!(gcd(17u64, 31), 1);
    }

    #[test]
    fn test_lcm_divides_products() {
        assert_eq!(lcm(4u64, 6), 12);
        assert_eq!(lcm(21u64, 6), 42);
        assert_eq!(lcm(1u64, 9), 9);
    }

    #[test]
    fn test_isqrt_is_floor_of_square_root() {
        for n in 0u64..1000 {
            let r = isqrt(n);
            assert!(r * r <= n, "isqrt({n}) = {r} overshoots");
            assert!((r + 1) * (r + 1) > n, "isqrt({n}) = {r} undershoots");
        }
    }

    #[test]
    fn test_isqrt_handles_large_inputs() {
        assert_eq!(isqrt(u64::MAX), 4_294_967_295);
        assert_eq!(isqrt(10_000_000_000_000_000_000), 3_162_277_660);
    }

    #[test]
    fn test_exact_isqrt_accepts_only_perfect_squares() {
        assert_eq!(exact_isqrt(0), Some(0));
        assert_eq!(exact_isqrt(1), Some(1));
        assert_eq!(exact_isqrt(2), None);
        assert_eq!(exact_isqrt(144), Some(12));
        assert_eq!(exact_isqrt(143), None);
    }

    #[test]
    fn test_pow_mod_matches_naive_exponentiation() {
        for base in 0u64..8 {
            for exp in 0u64..8 {
                let naive = (0..exp).fold(1u64, |acc, _| acc * base) % 97;
                assert_eq!(pow_mod(base, exp, 97), naive);
            }
        }
    }

    #[test]
    fn test_pow_mod_with_modulus_one_is_zero() {
        assert_eq!(pow_mod(123, 456, 1), 0);
    }

    #[test]
    fn test_multiplicative_order_of_ten() {
        // Cycle lengths of 1/d for the first few primes with terminating
        // inverses excluded: 1/3 repeats with period 1, 1/7 with period 6.
        assert_eq!(multiplicative_order(10, 3), Ok(1));
        assert_eq!(multiplicative_order(10, 7), Ok(6));
        assert_eq!(multiplicative_order(10, 13), Ok(6));
        assert_eq!(multiplicative_order(10, 17), Ok(16));
    }

    #[test]
    fn test_multiplicative_order_rejects_shared_factors() {
        let err = multiplicative_order(10, 4).unwrap_err();
        assert_eq!(err.base, 10);
        assert_eq!(err.modulus, 4);
        assert!(multiplicative_order(6, 0).is_err());
    }

    #[test]
    fn test_factorial_small_values() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(9), 362_880);
        assert_eq!(factorial(20), 2_432_902_008_176_640_000);
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn test_factorial_rejects_overflowing_input() {
        factorial(21);
    }

    #[test]
    fn test_big_factorial_agrees_with_u64_factorial() {
        for n in 0..=20 {
            assert_eq!(big_factorial(n), BigUint::from(factorial(n)));
        }
    }
}
