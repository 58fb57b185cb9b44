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

//! # Problem 28: Number spiral diagonals
//!
//! What is the sum of the numbers on the diagonals in a 1001 by 1001 spiral
//! formed by moving clockwise from the center?

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::sequences::SpiralDiagonals;

fn diagonal_sum(side: u64) -> u64 {
    // A spiral of odd side s has 2s - 1 diagonal values.
    SpiralDiagonals::new().take((2 * side - 1) as usize).sum()
}

/// Sums the diagonals of a 1001x1001 number spiral.
pub struct NumberSpiralDiagonals;

impl Problem for NumberSpiralDiagonals {
    fn id(&self) -> u32 {
        28
    }

    fn title(&self) -> &'static str {
        "Number spiral diagonals"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(diagonal_sum(1001) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // The diagonals of the 5x5 spiral sum to 101.
        assert_eq!(diagonal_sum(5), 101);
    }

    #[test]
    fn test_trivial_spiral() {
        assert_eq!(diagonal_sum(1), 1);
    }

    #[test]
    fn test_answer() {
        assert_eq!(diagonal_sum(1001), 669_171_001);
    }
}
