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

//! # Problem 52: Permuted multiples
//!
//! Find the smallest positive integer x such that 2x, 3x, 4x, 5x, and 6x
//! contain exactly the same digits.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::digits::digit_signature;

fn smallest_permuted_multiple(max_factor: u64) -> u64 {
    for n in 1.. {
        let signature = digit_signature(n);
        if (2..=max_factor).all(|k| digit_signature(k * n) == signature) {
            return n;
        }
    }
    unreachable!("142857-style cyclic numbers exist")
}

/// Finds the smallest integer whose first six multiples are permutations.
pub struct PermutedMultiples;

impl Problem for PermutedMultiples {
    fn id(&self) -> u32 {
        52
    }

    fn title(&self) -> &'static str {
        "Permuted multiples"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(smallest_permuted_multiple(6) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // 125874 and its double 251748 share the same digits.
        assert_eq!(digit_signature(125_874), digit_signature(251_748));
    }

    #[test]
    fn test_double_only_case() {
        assert_eq!(smallest_permuted_multiple(2), 125_874);
    }

    #[test]
    fn test_answer() {
        assert_eq!(smallest_permuted_multiple(6), 142_857);
    }
}
