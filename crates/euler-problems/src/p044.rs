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

//! # Problem 44: Pentagon numbers
//!
//! Find the pair of pentagonal numbers whose sum and difference are both
//! pentagonal, minimising the difference.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::figurate::{is_pentagonal, pentagonal};

fn minimal_pentagonal_difference() -> u64 {
    for n in 2u64.. {
        let p_n = pentagonal(n);
        for j in 1..n {
            let p_j = pentagonal(j);
            if is_pentagonal(p_n - p_j) && is_pentagonal(p_n + p_j) {
                return p_n - p_j;
            }
        }
    }
    unreachable!("a qualifying pentagonal pair exists")
}

/// Finds the minimal pentagonal difference of a pentagonal pair.
pub struct PentagonNumbers;

impl Problem for PentagonNumbers {
    fn id(&self) -> u32 {
        44
    }

    fn title(&self) -> &'static str {
        "Pentagon numbers"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(minimal_pentagonal_difference() as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // P4 + P7 = 22 + 70 = 92 = P8, but the difference 48 is not
        // pentagonal.
        assert_eq!(pentagonal(4) + pentagonal(7), pentagonal(8));
        assert!(is_pentagonal(pentagonal(4) + pentagonal(7)));
        assert!(!is_pentagonal(pentagonal(7) - pentagonal(4)));
    }

    #[test]
    fn test_answer() {
        assert_eq!(minimal_pentagonal_difference(), 5_482_660);
    }
}
