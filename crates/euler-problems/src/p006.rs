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

//! # Problem 6: Sum square difference
//!
//! Find the difference between the square of the sum and the sum of the
//! squares of the first one hundred natural numbers.

use crate::problem::{Answer, Problem, SolveContext, SolveError};

fn sum_square_difference(n: u64) -> u64 {
    let sum: u64 = (1..=n).sum();
    let sum_of_squares: u64 = (1..=n).map(|x| x * x).sum();
    sum * sum - sum_of_squares
}

/// Computes the sum-square difference for the first hundred naturals.
pub struct SumSquareDifference;

impl Problem for SumSquareDifference {
    fn id(&self) -> u32 {
        6
    }

    fn title(&self) -> &'static str {
        "Sum square difference"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(sum_square_difference(100) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // 3025 - 385 = 2640 for the first ten naturals.
        assert_eq!(sum_square_difference(10), 2640);
    }

    #[test]
    fn test_answer() {
        assert_eq!(sum_square_difference(100), 25_164_150);
    }
}
