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

//! # Problem 9: Special Pythagorean triplet
//!
//! Exactly one Pythagorean triplet satisfies a + b + c = 1000; find the
//! product abc.

use crate::problem::{Answer, Problem, SolveContext, SolveError};

fn triplet_product(perimeter: u64) -> Option<u64> {
    for a in 1..=perimeter / 2 {
        for b in a..=perimeter / 2 {
            let c = perimeter - a - b;
            if a * a + b * b == c * c {
                return Some(a * b * c);
            }
        }
    }
    None
}

/// Finds the product of the Pythagorean triplet summing to 1000.
pub struct SpecialPythagoreanTriplet;

impl Problem for SpecialPythagoreanTriplet {
    fn id(&self) -> u32 {
        9
    }

    fn title(&self) -> &'static str {
        "Special Pythagorean triplet"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        let product = triplet_product(1000).expect("a triplet summing to 1000 exists");
        Ok(product as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // 3^2 + 4^2 = 5^2 and 3 + 4 + 5 = 12.
        assert_eq!(triplet_product(12), Some(60));
    }

    #[test]
    fn test_no_triplet_for_tiny_perimeter() {
        assert_eq!(triplet_product(5), None);
    }

    #[test]
    fn test_answer() {
        assert_eq!(triplet_product(1000), Some(31_875_000));
    }
}
