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

//! # Problem 5: Smallest multiple
//!
//! Find the smallest positive number evenly divisible by all of 1 to 20.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::arith::lcm;

fn smallest_multiple(n: u64) -> u64 {
    (2..=n).fold(1, lcm)
}

/// Finds the least common multiple of 1 through 20.
pub struct SmallestMultiple;

impl Problem for SmallestMultiple {
    fn id(&self) -> u32 {
        5
    }

    fn title(&self) -> &'static str {
        "Smallest multiple"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(smallest_multiple(20) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // 2520 is the smallest number divisible by each of 1 to 10.
        assert_eq!(smallest_multiple(10), 2520);
    }

    #[test]
    fn test_answer() {
        assert_eq!(smallest_multiple(20), 232_792_560);
    }
}
