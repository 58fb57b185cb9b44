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

//! # Problem 1: Multiples of 3 or 5
//!
//! Find the sum of all the multiples of 3 or 5 below 1000.

use crate::problem::{Answer, Problem, SolveContext, SolveError};

fn sum_of_multiples(limit: i64) -> i64 {
    (1..limit).filter(|n| n % 3 == 0 || n % 5 == 0).sum()
}

/// Sums the multiples of 3 or 5 below 1000.
pub struct MultiplesOfThreeOrFive;

impl Problem for MultiplesOfThreeOrFive {
    fn id(&self) -> u32 {
        1
    }

    fn title(&self) -> &'static str {
        "Multiples of 3 and 5"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(sum_of_multiples(1000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example_below_ten() {
        // 3 + 5 + 6 + 9
        assert_eq!(sum_of_multiples(10), 23);
    }

    #[test]
    fn test_answer() {
        assert_eq!(sum_of_multiples(1000), 233_168);
    }
}
