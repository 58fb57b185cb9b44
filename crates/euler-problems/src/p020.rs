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

//! # Problem 20: Factorial digit sum
//!
//! Find the sum of the digits in 100!.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::arith::big_factorial;
use euler_core::digits::big_digit_sum;

fn factorial_digit_sum(n: u32) -> u64 {
    big_digit_sum(&big_factorial(n))
}

/// Sums the decimal digits of 100!.
pub struct FactorialDigitSum;

impl Problem for FactorialDigitSum {
    fn id(&self) -> u32 {
        20
    }

    fn title(&self) -> &'static str {
        "Factorial digit sum"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(factorial_digit_sum(100) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // 10! = 3628800 and 3 + 6 + 2 + 8 + 8 = 27.
        assert_eq!(factorial_digit_sum(10), 27);
    }

    #[test]
    fn test_answer() {
        assert_eq!(factorial_digit_sum(100), 648);
    }
}
