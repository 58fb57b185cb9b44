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

//! # Problem 10: Summation of primes
//!
//! Find the sum of all the primes below two million.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::primes::Sieve;

fn prime_sum_below(limit: usize) -> u64 {
    Sieve::below(limit).iter().sum()
}

/// Sums the primes below two million.
pub struct SummationOfPrimes;

impl Problem for SummationOfPrimes {
    fn id(&self) -> u32 {
        10
    }

    fn title(&self) -> &'static str {
        "Summation of primes"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(prime_sum_below(2_000_000) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // 2 + 3 + 5 + 7
        assert_eq!(prime_sum_below(10), 17);
    }

    #[test]
    fn test_answer() {
        assert_eq!(prime_sum_below(2_000_000), 142_913_828_922);
    }
}
