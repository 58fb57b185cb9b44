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

//! # Problem 25: 1000-digit Fibonacci number
//!
//! What is the index of the first term in the Fibonacci sequence to contain
//! 1000 digits?

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::sequences::BigFibonacci;
use num_bigint::BigUint;

fn first_term_with_digits(digits: u32) -> u64 {
    let threshold = BigUint::from(10u32).pow(digits - 1);
    for (index, term) in BigFibonacci::new().enumerate() {
        if term >= threshold {
            return index as u64;
        }
    }
    unreachable!("the Fibonacci sequence is unbounded")
}

/// Finds the index of the first thousand-digit Fibonacci term.
pub struct ThousandDigitFibonacci;

impl Problem for ThousandDigitFibonacci {
    fn id(&self) -> u32 {
        25
    }

    fn title(&self) -> &'static str {
        "1000-digit Fibonacci number"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(first_term_with_digits(1000) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // F12 = 144 is the first term with three digits.
        assert_eq!(first_term_with_digits(3), 12);
    }

    #[test]
    fn test_answer() {
        assert_eq!(first_term_with_digits(1000), 4782);
    }
}
