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

//! # Problem 26: Reciprocal cycles
//!
//! Find the value of d below 1000 for which 1/d has the longest recurring
//! decimal cycle.
//!
//! By Fermat's little theorem the period of 1/p for a prime p coprime to 10
//! equals the multiplicative order of 10 modulo p, so only primes need to be
//! examined.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::arith::multiplicative_order;
use euler_core::primes::Sieve;

fn longest_cycle_denominator(limit: usize) -> u64 {
    let mut best_denominator = 0;
    let mut best_period = 0;
    for p in Sieve::below(limit).iter() {
        if p == 2 || p == 5 {
            continue; // 1/p terminates
        }
        let period = multiplicative_order(10, p).expect("p is coprime to 10");
        if period > best_period {
            best_denominator = p;
            best_period = period;
        }
    }
    best_denominator
}

/// Finds the unit fraction below 1000 with the longest recurring cycle.
pub struct ReciprocalCycles;

impl Problem for ReciprocalCycles {
    fn id(&self) -> u32 {
        26
    }

    fn title(&self) -> &'static str {
        "Reciprocal cycles"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(longest_cycle_denominator(1000) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // 1/7 has a six-digit cycle, the longest below 10.
        assert_eq!(longest_cycle_denominator(10), 7);
    }

    #[test]
    fn test_answer() {
        assert_eq!(longest_cycle_denominator(1000), 983);
    }
}
