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

//! # Problem 34: Digit factorials
//!
//! Find the sum of all numbers which are equal to the sum of the factorials
//! of their digits. 1! and 2! are not sums and do not count.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::arith::factorial;
use euler_core::digits::digits;

fn digit_factorial_sum_total() -> u64 {
    let lookup: Vec<u64> = (0..10).map(factorial).collect();
    // 9! bounds the search: a seven-digit sum of digit factorials tops out
    // below 9! * 7, and 9! already exceeds every six-digit candidate range.
    (10..factorial(9))
        .filter(|&n| {
            digits(n)
                .iter()
                .map(|&d| lookup[d as usize])
                .sum::<u64>()
                == n
        })
        .sum()
}

/// Sums the curious numbers equal to their digit-factorial total.
pub struct DigitFactorials;

impl Problem for DigitFactorials {
    fn id(&self) -> u32 {
        34
    }

    fn title(&self) -> &'static str {
        "Digit factorials"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(digit_factorial_sum_total() as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // 145 = 1! + 4! + 5!.
        let total: u64 = digits(145).iter().map(|&d| factorial(u32::from(d))).sum();
        assert_eq!(total, 145);
    }

    #[test]
    fn test_answer() {
        // The only members are 145 and 40585.
        assert_eq!(digit_factorial_sum_total(), 40_730);
    }
}
