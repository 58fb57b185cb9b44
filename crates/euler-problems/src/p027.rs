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

//! # Problem 27: Quadratic primes
//!
//! Considering quadratics n^2 + an + b with |a| < 1000 and |b| < 1000, find
//! the product of the coefficients producing the maximum number of primes
//! for consecutive values of n starting with n = 0.
//!
//! b must itself be prime (take n = 0) and a must be odd (take n = 1), which
//! prunes the coefficient grid considerably.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::memo::MemoizedPredicate;
use euler_core::primes::{is_prime, Sieve};

fn quadratic_is_prime(
    n: i64,
    a: i64,
    b: i64,
    primality: &mut MemoizedPredicate<fn(u64) -> bool>,
) -> bool {
    let value = n * n + a * n + b;
    value > 0 && primality.contains(value as u64)
}

fn best_coefficient_product(coefficient_limit: i64) -> i64 {
    let mut primality: MemoizedPredicate<fn(u64) -> bool> = MemoizedPredicate::new(is_prime);
    // n^2 + n + 41 sets the bar at forty consecutive primes.
    let mut best_run: i64 = 40;
    let mut best_product: i64 = 41;
    for b in Sieve::below(coefficient_limit as usize).iter() {
        let b = b as i64;
        for a in (-coefficient_limit + 1..coefficient_limit).step_by(2) {
            if (0..best_run)
                .rev()
                .all(|n| quadratic_is_prime(n, a, b, &mut primality))
            {
                while quadratic_is_prime(best_run + 1, a, b, &mut primality) {
                    best_run += 1;
                    best_product = a * b;
                }
            }
        }
    }
    best_product
}

/// Finds the quadratic coefficients with the longest consecutive prime run.
pub struct QuadraticPrimes;

impl Problem for QuadraticPrimes {
    fn id(&self) -> u32 {
        27
    }

    fn title(&self) -> &'static str {
        "Quadratic primes"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(best_coefficient_product(1000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eulers_quadratic_produces_forty_primes() {
        let mut primality: MemoizedPredicate<fn(u64) -> bool> = MemoizedPredicate::new(is_prime);
        assert!((0..40).all(|n| quadratic_is_prime(n, 1, 41, &mut primality)));
        // n = 40 gives 40 * 41 + 41, divisible by 41.
        assert!(!quadratic_is_prime(40, 1, 41, &mut primality));
    }

    #[test]
    fn test_negative_values_are_never_prime() {
        let mut primality: MemoizedPredicate<fn(u64) -> bool> = MemoizedPredicate::new(is_prime);
        assert!(!quadratic_is_prime(0, -999, -1, &mut primality));
    }
}
