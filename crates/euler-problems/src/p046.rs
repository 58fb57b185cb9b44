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

//! # Problem 46: Goldbach's other conjecture
//!
//! What is the smallest odd composite that cannot be written as the sum of a
//! prime and twice a square?

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::primes::Sieve;
use fixedbitset::FixedBitSet;

/// Strikes every reachable value p + 2k^2 below `bound` and returns the
/// first odd composite left standing, if any.
fn smallest_unreachable_below(bound: usize) -> Option<u64> {
    let sieve = Sieve::below(bound);
    let mut candidates = FixedBitSet::with_capacity(bound);
    // Start from the odd numbers above one.
    for n in (3..bound).step_by(2) {
        candidates.set(n, true);
    }
    for p in sieve.iter() {
        let mut k = 0u64;
        loop {
            let reachable = p + 2 * k * k;
            if reachable as usize >= bound {
                break;
            }
            // k = 0 strikes the primes themselves.
            candidates.set(reachable as usize, false);
            k += 1;
        }
    }
    candidates.ones().next().map(|n| n as u64)
}

fn smallest_goldbach_counterexample() -> u64 {
    let mut bound = 10;
    loop {
        if let Some(n) = smallest_unreachable_below(bound) {
            return n;
        }
        bound *= 2;
    }
}

/// Finds the smallest odd composite refuting Goldbach's other conjecture.
pub struct GoldbachsOtherConjecture;

impl Problem for GoldbachsOtherConjecture {
    fn id(&self) -> u32 {
        46
    }

    fn title(&self) -> &'static str {
        "Goldbach's other conjecture"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(smallest_goldbach_counterexample() as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_odd_composites_are_all_expressible() {
        // 9 = 7 + 2*1^2, 15 = 7 + 2*2^2, ..., 33 = 31 + 2*1^2.
        assert_eq!(smallest_unreachable_below(100), None);
    }

    #[test]
    fn test_answer() {
        assert_eq!(smallest_goldbach_counterexample(), 5777);
    }
}
