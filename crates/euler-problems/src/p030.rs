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

//! # Problem 30: Digit fifth powers
//!
//! Find the sum of all the numbers that can be written as the sum of fifth
//! powers of their digits.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::digits::digits;

/// Six digits of nines is already past the largest possible digit-power sum,
/// so `6 * 9^power` bounds the search.
fn digit_power_numbers_sum(power: u32) -> u64 {
    let limit = 6 * 9u64.pow(power);
    (10..limit)
        .filter(|&n| {
            digits(n)
                .iter()
                .map(|&d| u64::from(d).pow(power))
                .sum::<u64>()
                == n
        })
        .sum()
}

/// Sums the numbers equal to the sum of the fifth powers of their digits.
pub struct DigitFifthPowers;

impl Problem for DigitFifthPowers {
    fn id(&self) -> u32 {
        30
    }

    fn title(&self) -> &'static str {
        "Digit fifth powers"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(digit_power_numbers_sum(5) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_fourth_power_example() {
        // 1634 + 8208 + 9474 = 19316.
        assert_eq!(digit_power_numbers_sum(4), 19_316);
    }
}
