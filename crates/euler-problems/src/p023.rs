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

//! # Problem 23: Non-abundant sums
//!
//! Find the sum of all the positive integers which cannot be written as the
//! sum of two abundant numbers. All integers greater than 28123 can be.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::primes::proper_divisor_sum;
use fixedbitset::FixedBitSet;

const ANALYTIC_LIMIT: usize = 28_123;

fn is_abundant(n: u64) -> bool {
    proper_divisor_sum(n) > n
}

fn non_abundant_sum(limit: usize) -> u64 {
    let abundant: Vec<usize> = (1..=limit).filter(|&n| is_abundant(n as u64)).collect();
    let mut expressible = FixedBitSet::with_capacity(limit + 1);
    for (i, &a) in abundant.iter().enumerate() {
        for &b in &abundant[i..] {
            let sum = a + b;
            if sum > limit {
                break;
            }
            expressible.set(sum, true);
        }
    }
    (1..=limit)
        .filter(|&n| !expressible.contains(n))
        .map(|n| n as u64)
        .sum()
}

/// Sums the integers that are not a sum of two abundant numbers.
pub struct NonAbundantSums;

impl Problem for NonAbundantSums {
    fn id(&self) -> u32 {
        23
    }

    fn title(&self) -> &'static str {
        "Non-abundant sums"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(non_abundant_sum(ANALYTIC_LIMIT) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_is_the_smallest_abundant_number() {
        let first_abundant: Vec<u64> = (1..=30).filter(|&n| is_abundant(n)).collect();
        assert_eq!(first_abundant, vec![12, 18, 20, 24, 30]);
    }

    #[test]
    fn test_perfect_numbers_are_not_abundant() {
        assert!(!is_abundant(6));
        assert!(!is_abundant(28));
    }

    #[test]
    fn test_twenty_four_is_the_smallest_expressible_number() {
        // Below 24 nothing is a sum of two abundant numbers, so the tally is
        // just 1 + 2 + ... + 23.
        assert_eq!(non_abundant_sum(24), (1..24).sum::<u64>());
    }
}
