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

//! # Problem 48: Self powers
//!
//! Find the last ten digits of the series 1^1 + 2^2 + ... + 1000^1000.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::arith::pow_mod;

const TEN_DIGITS: u64 = 10_000_000_000;

fn self_power_series_tail(terms: u64) -> u64 {
    (1..=terms).fold(0, |acc, i| (acc + pow_mod(i, i, TEN_DIGITS)) % TEN_DIGITS)
}

/// Computes the last ten digits of the self-power series.
pub struct SelfPowers;

impl Problem for SelfPowers {
    fn id(&self) -> u32 {
        48
    }

    fn title(&self) -> &'static str {
        "Self powers"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(self_power_series_tail(1000) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // 1^1 + 2^2 + ... + 10^10 = 10405071317.
        assert_eq!(self_power_series_tail(10), 10_405_071_317 % TEN_DIGITS);
    }

    #[test]
    fn test_answer() {
        assert_eq!(self_power_series_tail(1000), 9_110_846_700);
    }
}
