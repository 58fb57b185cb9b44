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

//! # Primality, Factorization, Divisors
//!
//! The prime-number toolkit: a trial-division primality test for one-off
//! queries, a bitset-backed Sieve of Eratosthenes for dense ranges, prime
//! factorization, and divisor enumeration derived from it.
//!
//! ## Highlights
//!
//! - `Sieve::below(n)` marks exactly the primes less than `n`; membership,
//!   iteration, and materialization into a `Vec` are all cheap.
//! - `factorize(n)` returns prime factors in non-decreasing order.
//!   `factorize(1)` is `[1]`, so every `n >= 1` has a nonempty factor list
//!   and `divisors(1)` comes out as `[1]` without a special case.
//! - `divisors(n)` is always sorted, starts at `1`, and ends at `n`.

use crate::arith::isqrt;
use fixedbitset::FixedBitSet;

/// Tests `n` for primality by trial division.
///
/// Suited to scattered queries; for dense ranges below a known bound, build
/// a [`Sieve`] instead.
///
/// # Examples
///
/// ```rust
/// # use euler_core::primes::is_prime;
/// assert!(is_prime(2));
/// assert!(is_prime(104_729));
/// assert!(!is_prime(1));
/// assert!(!is_prime(99));
/// ```
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let limit = isqrt(n);
    let mut d = 3;
    while d <= limit {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// A Sieve of Eratosthenes over a fixed bitset.
///
/// # Invariants
///
/// A sieve built with [`Sieve::below(n)`](Sieve::below) contains exactly the
/// primes `p` with `p < n`.
///
/// # Examples
///
/// ```rust
/// # use euler_core::primes::Sieve;
/// let sieve = Sieve::below(30);
/// assert!(sieve.contains(29));
/// assert!(!sieve.contains(30));
/// assert_eq!(sieve.count(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct Sieve {
    bits: FixedBitSet,
    limit: usize,
}

impl Sieve {
    /// Builds the sieve of all primes strictly below `limit`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use euler_core::primes::Sieve;
    /// assert_eq!(Sieve::below(2).primes(), Vec::<u64>::new());
    /// assert_eq!(Sieve::below(8).primes(), vec![2, 3, 5, 7]);
    /// ```
    pub fn below(limit: usize) -> Self {
        let mut bits = FixedBitSet::with_capacity(limit.max(2));
        bits.set_range(2.., true);
        let mut p = 2;
        while p * p < limit {
            if bits.contains(p) {
                let mut multiple = p * p;
                while multiple < limit {
                    bits.set(multiple, false);
                    multiple += p;
                }
            }
            p += 1;
        }
        Self { bits, limit }
    }

    /// Returns the exclusive upper bound this sieve was built with.
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Tests whether `n` is a prime below the sieve limit.
    ///
    /// Values at or above the limit are reported as not contained, never as
    /// composite knowledge the sieve does not have.
    #[inline]
    pub fn contains(&self, n: u64) -> bool {
        match usize::try_from(n) {
            Ok(i) if i < self.limit => self.bits.contains(i),
            _ => false,
        }
    }

    /// Iterates the primes below the limit in increasing order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.bits.ones().map(|i| i as u64)
    }

    /// Materializes the primes below the limit into a vector.
    #[inline]
    pub fn primes(&self) -> Vec<u64> {
        self.iter().collect()
    }

    /// Counts the primes below the limit.
    #[inline]
    pub fn count(&self) -> usize {
        self.bits.count_ones(..)
    }
}

/// Returns the prime factors of `n` in non-decreasing order.
///
/// `factorize(1)` is `[1]`: the unit has no prime factorization, and keeping
/// a nonempty result lets divisor enumeration treat it uniformly.
///
/// # Panics
///
/// Panics if `n == 0`.
///
/// # Examples
///
/// ```rust
/// # use euler_core::primes::factorize;
/// assert_eq!(factorize(12), vec![2, 2, 3]);
/// assert_eq!(factorize(4998), vec![2, 3, 7, 7, 17]);
/// assert_eq!(factorize(4999), vec![4999]);
/// ```
pub fn factorize(mut n: u64) -> Vec<u64> {
    assert!(n != 0, "factorize: 0 has no prime factorization");
    if n == 1 {
        return vec![1];
    }
    let mut factors = Vec::new();
    while n % 2 == 0 {
        factors.push(2);
        n /= 2;
    }
    let mut d = 3;
    let mut limit = isqrt(n);
    while d <= limit {
        while n % d == 0 {
            factors.push(d);
            n /= d;
            limit = isqrt(n);
        }
        d += 2;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// Counts the distinct prime factors of `n`.
///
/// # Examples
///
/// ```rust
/// # use euler_core::primes::distinct_factor_count;
/// assert_eq!(distinct_factor_count(644), 3); // 2^2 * 7 * 23
/// assert_eq!(distinct_factor_count(7), 1);
/// ```
pub fn distinct_factor_count(n: u64) -> usize {
    let factors = factorize(n);
    let mut count = 1;
    for pair in factors.windows(2) {
        if pair[0] != pair[1] {
            count += 1;
        }
    }
    count
}

/// Counts the divisors of `n` from the exponents of its factorization.
///
/// # Examples
///
/// ```rust
/// # use euler_core::primes::divisor_count;
/// assert_eq!(divisor_count(1), 1);
/// assert_eq!(divisor_count(28), 6);
/// ```
pub fn divisor_count(n: u64) -> u64 {
    if n == 1 {
        return 1;
    }
    let factors = factorize(n);
    let mut count = 1;
    let mut run = 1;
    for i in 1..factors.len() {
        if factors[i] == factors[i - 1] {
            run += 1;
        } else {
            count *= run + 1;
            run = 1;
        }
    }
    count * (run + 1)
}

/// Returns the sorted divisors of `n`.
///
/// The result always starts at `1` and ends at `n`.
///
/// # Examples
///
/// ```rust
/// # use euler_core::primes::divisors;
/// assert_eq!(divisors(100), vec![1, 2, 4, 5, 10, 20, 25, 50, 100]);
/// assert_eq!(divisors(9973), vec![1, 9973]);
/// ```
pub fn divisors(n: u64) -> Vec<u64> {
    if n == 1 {
        return vec![1];
    }
    let factors = factorize(n);
    let mut result = vec![1u64];
    let mut i = 0;
    while i < factors.len() {
        let p = factors[i];
        let mut exponent = 0;
        while i < factors.len() && factors[i] == p {
            exponent += 1;
            i += 1;
        }
        let base_len = result.len();
        let mut power = 1u64;
        for _ in 0..exponent {
            power *= p;
            for j in 0..base_len {
                result.push(result[j] * power);
            }
        }
    }
    result.sort_unstable();
    result
}

/// Sums the proper divisors of `n` (divisors strictly less than `n`).
///
/// # Examples
///
/// ```rust
/// # use euler_core::primes::proper_divisor_sum;
/// assert_eq!(proper_divisor_sum(220), 284);
/// assert_eq!(proper_divisor_sum(284), 220);
/// assert_eq!(proper_divisor_sum(1), 0);
/// ```
pub fn proper_divisor_sum(n: u64) -> u64 {
    divisors(n).iter().sum::<u64>() - n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime_small_values() {
        let primes_below_20: Vec<u64> = (0..20).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes_below_20, vec![2, 3, 5, 7, 11, 13, 17, 19]);
    }

    #[test]
    fn test_is_prime_rejects_zero_and_one() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
    }

    #[test]
    fn test_is_prime_larger_values() {
        assert!(is_prime(104_729));
        assert!(!is_prime(104_730));
        assert!(is_prime(600_851_475_143 / 6857 / 1471 / 839)); // 71
        assert!(!is_prime(1_000_003 * 3));
    }

    #[test]
    fn test_sieve_empty_below_two() {
        assert_eq!(Sieve::below(0).primes(), Vec::<u64>::new());
        assert_eq!(Sieve::below(2).primes(), Vec::<u64>::new());
    }

    #[test]
    fn test_sieve_excludes_the_limit_itself() {
        assert_eq!(Sieve::below(7).primes(), vec![2, 3, 5]);
        assert_eq!(Sieve::below(8).primes(), vec![2, 3, 5, 7]);
    }

    #[test]
    fn test_sieve_prime_sum_below_111() {
        let sieve = Sieve::below(111);
        assert_eq!(sieve.iter().sum::<u64>(), 1480);
    }

    #[test]
    fn test_sieve_agrees_with_trial_division() {
        let sieve = Sieve::below(2000);
        for n in 0..2000u64 {
            assert_eq!(sieve.contains(n), is_prime(n), "disagreement at {n}");
        }
    }

    #[test]
    fn test_sieve_membership_outside_range_is_false() {
        let sieve = Sieve::below(10);
        assert!(!sieve.contains(11)); // prime, but beyond the limit
        assert!(!sieve.contains(u64::MAX));
    }

    #[test]
    fn test_factorize_unit_and_primes() {
        assert_eq!(factorize(1), vec![1]);
        assert_eq!(factorize(2), vec![2]);
        assert_eq!(factorize(13), vec![13]);
    }

    #[test]
    fn test_factorize_composites_in_order() {
        assert_eq!(factorize(360), vec![2, 2, 2, 3, 3, 5]);
        assert_eq!(factorize(600_851_475_143), vec![71, 839, 1471, 6857]);
    }

    #[test]
    fn test_distinct_factor_count() {
        assert_eq!(distinct_factor_count(14), 2);
        assert_eq!(distinct_factor_count(15), 2);
        assert_eq!(distinct_factor_count(644), 3);
        assert_eq!(distinct_factor_count(645), 3);
        assert_eq!(distinct_factor_count(646), 3);
    }

    #[test]
    fn test_divisor_count_matches_enumeration() {
        for n in 1..500u64 {
            assert_eq!(
                divisor_count(n),
                divisors(n).len() as u64,
                "disagreement at {n}"
            );
        }
    }

    #[test]
    fn test_divisors_sorted_with_unit_and_self() {
        assert_eq!(divisors(1), vec![1]);
        assert_eq!(divisors(28), vec![1, 2, 4, 7, 14, 28]);
        let d = divisors(9_999);
        assert_eq!(d.first(), Some(&1));
        assert_eq!(d.last(), Some(&9_999));
        assert!(d.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_proper_divisor_sum_amicable_pair() {
        assert_eq!(proper_divisor_sum(220), 284);
        assert_eq!(proper_divisor_sum(284), 220);
    }

    #[test]
    fn test_proper_divisor_sum_perfect_number() {
        assert_eq!(proper_divisor_sum(28), 28);
    }
}
