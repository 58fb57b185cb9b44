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

//! # Problem 4: Largest palindrome product
//!
//! Find the largest palindrome made from the product of two 3-digit numbers.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::digits::is_palindrome;

fn largest_palindrome_product(lo: u64, hi: u64) -> u64 {
    let mut best = 0;
    for x in lo..hi {
        for y in x..hi {
            let product = x * y;
            if product > best && is_palindrome(product) {
                best = product;
            }
        }
    }
    best
}

/// Finds the largest palindromic product of two 3-digit factors.
pub struct LargestPalindromeProduct;

impl Problem for LargestPalindromeProduct {
    fn id(&self) -> u32 {
        4
    }

    fn title(&self) -> &'static str {
        "Largest palindrome product"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(largest_palindrome_product(100, 1000) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_digit_factors() {
        // 91 * 99 = 9009
        assert_eq!(largest_palindrome_product(10, 100), 9009);
    }

    #[test]
    fn test_answer() {
        assert_eq!(largest_palindrome_product(100, 1000), 906_609);
    }
}
