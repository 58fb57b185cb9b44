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

//! # Problem 38: Pandigital multiples
//!
//! Find the largest 1-to-9 pandigital number formed by concatenating the
//! products of an integer with (1, 2, ..., n) for n > 1.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::digits::{digit_count, unique_nonzero_digit_mask, PANDIGITAL_1_TO_9};

/// Concatenates m, 2m, 3m, ... while the digits stay unique and nonzero,
/// and returns the value if the result is 1-to-9 pandigital.
fn concatenated_pandigital(m: u64) -> Option<u64> {
    let mut mask = 0u16;
    let mut value: u64 = 0;
    for n in 1.. {
        let part = n * m;
        let part_mask = unique_nonzero_digit_mask(part)?;
        if mask & part_mask != 0 {
            break;
        }
        mask |= part_mask;
        value = value * 10u64.pow(digit_count(part)) + part;
        if mask == PANDIGITAL_1_TO_9 {
            // n > 1 is required: the number alone is not a concatenation.
            return (n > 1).then_some(value);
        }
    }
    (mask == PANDIGITAL_1_TO_9).then_some(value)
}

fn largest_pandigital_multiple() -> u64 {
    // A five-digit base repeats a digit across m and 2m, so four digits cap
    // the search.
    (1..10_000)
        .filter_map(concatenated_pandigital)
        .max()
        .expect("9 * (1, 2, 3, 4, 5) is pandigital")
}

/// Finds the largest pandigital concatenated product.
pub struct PandigitalMultiples;

impl Problem for PandigitalMultiples {
    fn id(&self) -> u32 {
        38
    }

    fn title(&self) -> &'static str {
        "Pandigital multiples"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(largest_pandigital_multiple() as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_examples() {
        // 192 -> 192384576, 9 -> 918273645.
        assert_eq!(concatenated_pandigital(192), Some(192_384_576));
        assert_eq!(concatenated_pandigital(9), Some(918_273_645));
    }

    #[test]
    fn test_rejects_bases_with_repeats_or_zeros() {
        assert_eq!(concatenated_pandigital(11), None);
        assert_eq!(concatenated_pandigital(10), None);
    }

    #[test]
    fn test_answer() {
        assert_eq!(largest_pandigital_multiple(), 932_718_654);
    }
}
