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

//! # Problem 12: Highly divisible triangle number
//!
//! Find the first triangle number with over five hundred divisors.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::figurate::triangle;
use euler_core::primes::divisor_count;

fn first_triangle_with_more_divisors(threshold: u64) -> u64 {
    for n in 1.. {
        let t = triangle(n);
        if divisor_count(t) > threshold {
            return t;
        }
    }
    unreachable!("divisor counts of triangle numbers are unbounded")
}

/// Finds the first triangle number with more than 500 divisors.
pub struct HighlyDivisibleTriangleNumber;

impl Problem for HighlyDivisibleTriangleNumber {
    fn id(&self) -> u32 {
        12
    }

    fn title(&self) -> &'static str {
        "Highly divisible triangle number"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(first_triangle_with_more_divisors(500) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // 28 is the first triangle number with over five divisors.
        assert_eq!(first_triangle_with_more_divisors(5), 28);
    }

    #[test]
    fn test_answer() {
        assert_eq!(first_triangle_with_more_divisors(500), 76_576_500);
    }
}
