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

//! # Problem 24: Lexicographic permutations
//!
//! What is the millionth lexicographic permutation of the digits 0 through
//! 9?

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::digits::from_digits;
use euler_core::sequences::Permutations;

fn nth_permutation(digits: u8, n: usize) -> u64 {
    let arrangement = Permutations::of_ascending(digits)
        .nth(n - 1)
        .expect("n is at most digits!");
    from_digits(&arrangement)
}

/// Finds the millionth permutation of the digits 0-9.
pub struct LexicographicPermutations;

impl Problem for LexicographicPermutations {
    fn id(&self) -> u32 {
        24
    }

    fn title(&self) -> &'static str {
        "Lexicographic permutations"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(nth_permutation(10, 1_000_000) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // The permutations of 0, 1, 2 are 012, 021, 102, 120, 201, 210.
        assert_eq!(nth_permutation(3, 1), 12);
        assert_eq!(nth_permutation(3, 4), 120);
        assert_eq!(nth_permutation(3, 6), 210);
    }

    #[test]
    fn test_answer() {
        assert_eq!(nth_permutation(10, 1_000_000), 2_783_915_460);
    }
}
