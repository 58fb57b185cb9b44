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

//! # Problem 2: Even Fibonacci numbers
//!
//! Sum the even-valued Fibonacci terms that do not exceed four million.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::sequences::Fibonacci;

fn even_fibonacci_sum(limit: u64) -> u64 {
    Fibonacci::new()
        .take_while(|&f| f < limit)
        .filter(|f| f % 2 == 0)
        .sum()
}

/// Sums the even Fibonacci terms below four million.
pub struct EvenFibonacciNumbers;

impl Problem for EvenFibonacciNumbers {
    fn id(&self) -> u32 {
        2
    }

    fn title(&self) -> &'static str {
        "Even Fibonacci numbers"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(even_fibonacci_sum(4_000_000) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_terms_below_one_hundred() {
        // 2 + 8 + 34
        assert_eq!(even_fibonacci_sum(100), 44);
    }

    #[test]
    fn test_answer() {
        assert_eq!(even_fibonacci_sum(4_000_000), 4_613_732);
    }
}
