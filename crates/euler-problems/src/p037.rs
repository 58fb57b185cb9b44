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

//! # Problem 37: Truncatable primes
//!
//! Find the sum of the only eleven primes that remain prime when digits are
//! continuously removed from either end. 2, 3, 5, and 7 do not count.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::digits::digit_count;
use euler_core::memo::MemoizedPredicate;
use euler_core::primes::is_prime;

fn is_truncatable(n: u64, primality: &mut MemoizedPredicate<fn(u64) -> bool>) -> bool {
    if !primality.contains(n) {
        return false;
    }
    let len = digit_count(n);
    for k in 1..len {
        let split = 10u64.pow(k);
        // Right truncation keeps the high digits, left truncation the low.
        if !primality.contains(n / split) || !primality.contains(n % split) {
            return false;
        }
    }
    true
}

fn truncatable_prime_sum(expected_count: usize) -> u64 {
    let mut primality: MemoizedPredicate<fn(u64) -> bool> = MemoizedPredicate::new(is_prime);
    let mut total = 0;
    let mut found = 0;
    let mut n = 11;
    loop {
        if is_truncatable(n, &mut primality) {
            total += n;
            found += 1;
            if found == expected_count {
                return total;
            }
        }
        n += 2;
    }
}

/// Sums the eleven two-way truncatable primes.
pub struct TruncatablePrimes;

impl Problem for TruncatablePrimes {
    fn id(&self) -> u32 {
        37
    }

    fn title(&self) -> &'static str {
        "Truncatable primes"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(truncatable_prime_sum(11) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_memo() -> MemoizedPredicate<fn(u64) -> bool> {
        MemoizedPredicate::new(is_prime)
    }

    #[test]
    fn test_documented_example() {
        // 3797, 797, 97, 7 and 3797, 379, 37, 3 are all prime.
        assert!(is_truncatable(3797, &mut fresh_memo()));
    }

    #[test]
    fn test_near_misses() {
        assert!(!is_truncatable(3799, &mut fresh_memo())); // composite itself
        assert!(!is_truncatable(19, &mut fresh_memo())); // 9 is not prime
    }

    #[test]
    fn test_first_two_truncatable_primes() {
        // 23 and 37 are the smallest members.
        let mut memo = fresh_memo();
        let first_two: Vec<u64> = (11..40)
            .step_by(2)
            .filter(|&n| is_truncatable(n, &mut memo))
            .collect();
        assert_eq!(first_two, vec![23, 37]);
    }
}
