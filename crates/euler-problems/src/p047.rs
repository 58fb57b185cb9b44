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

//! # Problem 47: Distinct primes factors
//!
//! Find the first of four consecutive integers that each have four distinct
//! prime factors.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::primes::distinct_factor_count;

fn first_consecutive_run(run: usize) -> u64 {
    let mut consecutive = 0;
    for n in 2u64.. {
        if distinct_factor_count(n) == run {
            consecutive += 1;
            if consecutive == run {
                return n + 1 - run as u64;
            }
        } else {
            consecutive = 0;
        }
    }
    unreachable!("runs of numbers with n distinct factors exist for small n")
}

/// Finds four consecutive integers with four distinct prime factors each.
pub struct DistinctPrimesFactors;

impl Problem for DistinctPrimesFactors {
    fn id(&self) -> u32 {
        47
    }

    fn title(&self) -> &'static str {
        "Distinct primes factors"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(first_consecutive_run(4) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_examples() {
        // 14 = 2x7 and 15 = 3x5 are the first such pair.
        assert_eq!(first_consecutive_run(2), 14);
        // 644, 645, 646 are the first such triple.
        assert_eq!(first_consecutive_run(3), 644);
    }
}
