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

//! # Problem 14: Longest Collatz sequence
//!
//! Which starting number under one million produces the longest Collatz
//! chain?

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::sequences::CollatzLengths;

fn longest_chain_start(limit: u64) -> u64 {
    let mut lengths = CollatzLengths::new();
    let mut best_start = 1;
    let mut best_length = 1;
    for n in 1..limit {
        let length = lengths.length(n);
        if length > best_length {
            best_start = n;
            best_length = length;
        }
    }
    best_start
}

/// Finds the starting number under one million with the longest chain.
pub struct LongestCollatzSequence;

impl Problem for LongestCollatzSequence {
    fn id(&self) -> u32 {
        14
    }

    fn title(&self) -> &'static str {
        "Longest Collatz sequence"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(longest_chain_start(1_000_000) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_start_below_small_limits() {
        // Chains from 1..9: 9 has length 20, the longest below 10.
        assert_eq!(longest_chain_start(10), 9);
        // 27 famously reaches length 112.
        assert_eq!(longest_chain_start(30), 27);
    }
}
