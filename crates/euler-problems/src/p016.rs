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

//! # Problem 16: Power digit sum
//!
//! What is the sum of the digits of 2^1000?

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::digits::big_digit_sum;
use num_bigint::BigUint;

fn power_of_two_digit_sum(exponent: u32) -> u64 {
    big_digit_sum(&BigUint::from(2u32).pow(exponent))
}

/// Sums the decimal digits of 2^1000.
pub struct PowerDigitSum;

impl Problem for PowerDigitSum {
    fn id(&self) -> u32 {
        16
    }

    fn title(&self) -> &'static str {
        "Power digit sum"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(power_of_two_digit_sum(1000) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // 2^15 = 32768 and 3 + 2 + 7 + 6 + 8 = 26.
        assert_eq!(power_of_two_digit_sum(15), 26);
    }

    #[test]
    fn test_answer() {
        assert_eq!(power_of_two_digit_sum(1000), 1366);
    }
}
