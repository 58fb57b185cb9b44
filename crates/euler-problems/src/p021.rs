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

//! # Problem 21: Amicable numbers
//!
//! Evaluate the sum of all the amicable numbers under 10000.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::primes::proper_divisor_sum;

fn amicable_sum(limit: u64) -> u64 {
    let mut total = 0;
    for n in 1..limit {
        let partner = proper_divisor_sum(n);
        if partner != n && partner != 0 && proper_divisor_sum(partner) == n {
            total += n;
        }
    }
    total
}

/// Sums the amicable numbers below 10000.
pub struct AmicableNumbers;

impl Problem for AmicableNumbers {
    fn id(&self) -> u32 {
        21
    }

    fn title(&self) -> &'static str {
        "Amicable numbers"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(amicable_sum(10_000) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_pair() {
        // d(220) = 284 and d(284) = 220.
        assert_eq!(proper_divisor_sum(220), 284);
        assert_eq!(proper_divisor_sum(284), 220);
        // Both members lie below 300, so they are the whole sum there.
        assert_eq!(amicable_sum(300), 220 + 284);
    }

    #[test]
    fn test_perfect_numbers_are_not_amicable() {
        // 6 and 28 pair with themselves and must not be counted.
        assert_eq!(amicable_sum(30), 0);
    }

    #[test]
    fn test_answer() {
        assert_eq!(amicable_sum(10_000), 31_626);
    }
}
