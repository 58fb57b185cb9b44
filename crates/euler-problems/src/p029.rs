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

//! # Problem 29: Distinct powers
//!
//! How many distinct terms are in the sequence a^b for 2 <= a <= 100 and
//! 2 <= b <= 100?

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use num_bigint::BigUint;
use rustc_hash::FxHashSet;

fn distinct_power_count(max_base: u32, max_exponent: u32) -> usize {
    let mut seen: FxHashSet<BigUint> = FxHashSet::default();
    for a in 2..=max_base {
        let base = BigUint::from(a);
        for b in 2..=max_exponent {
            seen.insert(base.pow(b));
        }
    }
    seen.len()
}

/// Counts distinct values of a^b over a small coefficient grid.
pub struct DistinctPowers;

impl Problem for DistinctPowers {
    fn id(&self) -> u32 {
        29
    }

    fn title(&self) -> &'static str {
        "Distinct powers"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(distinct_power_count(100, 100) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // For 2 <= a, b <= 5 there are 15 distinct terms.
        assert_eq!(distinct_power_count(5, 5), 15);
    }

    #[test]
    fn test_answer() {
        assert_eq!(distinct_power_count(100, 100), 9183);
    }
}
