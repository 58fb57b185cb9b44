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

//! # Problem 36: Double-base palindromes
//!
//! Sum the numbers below one million that are palindromic in base 10 and
//! base 2 (no leading zeros in either base).

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::digits::{is_palindrome, is_palindromic_slice};

fn double_base_palindrome_sum(limit: u64) -> u64 {
    (1..limit)
        .filter(|&n| is_palindrome(n) && is_palindromic_slice(format!("{n:b}").as_bytes()))
        .sum()
}

/// Sums the palindromes in both decimal and binary below one million.
pub struct DoubleBasePalindromes;

impl Problem for DoubleBasePalindromes {
    fn id(&self) -> u32 {
        36
    }

    fn title(&self) -> &'static str {
        "Double-base palindromes"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(double_base_palindrome_sum(1_000_000) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // 585 = 1001001001 in binary.
        assert!(is_palindrome(585));
        assert!(is_palindromic_slice(format!("{:b}", 585).as_bytes()));
    }

    #[test]
    fn test_single_digit_values() {
        // 1, 3, 5, 7, 9 are palindromic in both bases.
        assert_eq!(double_base_palindrome_sum(10), 25);
    }
}
