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

//! # Problem 43: Sub-string divisibility
//!
//! Sum all 0-to-9 pandigital numbers whose three-digit substrings d2d3d4
//! through d8d9d10 are divisible by 2, 3, 5, 7, 11, 13, and 17 in turn.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::digits::from_digits;
use euler_core::sequences::Permutations;

const WINDOW_DIVISORS: [u64; 7] = [2, 3, 5, 7, 11, 13, 17];

fn has_substring_divisibility(digits: &[u8]) -> bool {
    WINDOW_DIVISORS.iter().enumerate().all(|(i, &divisor)| {
        let window = from_digits(&digits[i + 1..i + 4]);
        window % divisor == 0
    })
}

fn substring_divisible_sum() -> u64 {
    Permutations::of_ascending(10)
        .filter(|arrangement| has_substring_divisibility(arrangement))
        .map(|arrangement| from_digits(&arrangement))
        .sum()
}

/// Sums the pandigitals with the sub-string divisibility property.
pub struct SubStringDivisibility;

impl Problem for SubStringDivisibility {
    fn id(&self) -> u32 {
        43
    }

    fn title(&self) -> &'static str {
        "Sub-string divisibility"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(substring_divisible_sum() as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // 1406357289: 406 % 2, 063 % 3, 635 % 5, 357 % 7, 572 % 11,
        // 728 % 13, 289 % 17 all vanish.
        assert!(has_substring_divisibility(&[1, 4, 0, 6, 3, 5, 7, 2, 8, 9]));
    }

    #[test]
    fn test_near_miss() {
        assert!(!has_substring_divisibility(&[1, 4, 0, 6, 3, 5, 7, 2, 9, 8]));
    }
}
