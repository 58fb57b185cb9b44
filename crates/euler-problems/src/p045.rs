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

//! # Problem 45: Triangular, pentagonal, and hexagonal
//!
//! T285 = P165 = H143 = 40755. Find the next triangle number that is also
//! pentagonal and hexagonal.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::figurate::{is_hexagonal, is_pentagonal, triangle};

fn next_triple_figurate(after_index: u64) -> u64 {
    for n in after_index + 1.. {
        let t = triangle(n);
        if is_pentagonal(t) && is_hexagonal(t) {
            return t;
        }
    }
    unreachable!("every hexagonal number is triangular, so candidates recur")
}

/// Finds the next simultaneously triangular, pentagonal, hexagonal number.
pub struct TriangularPentagonalHexagonal;

impl Problem for TriangularPentagonalHexagonal {
    fn id(&self) -> u32 {
        45
    }

    fn title(&self) -> &'static str {
        "Triangular, pentagonal, and hexagonal"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(next_triple_figurate(285) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // Searching from the start rediscovers 40755.
        assert_eq!(next_triple_figurate(1), 40_755);
    }

    #[test]
    fn test_answer() {
        assert_eq!(next_triple_figurate(285), 1_533_776_805);
    }
}
