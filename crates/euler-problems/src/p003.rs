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

//! # Problem 3: Largest prime factor
//!
//! Find the largest prime factor of 600851475143.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::primes::factorize;

fn largest_prime_factor(n: u64) -> u64 {
    *factorize(n)
        .last()
        .expect("factorize never returns an empty list")
}

/// Finds the largest prime factor of 600851475143.
pub struct LargestPrimeFactor;

impl Problem for LargestPrimeFactor {
    fn id(&self) -> u32 {
        3
    }

    fn title(&self) -> &'static str {
        "Largest prime factor"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(largest_prime_factor(600_851_475_143) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // The prime factors of 13195 are 5, 7, 13 and 29.
        assert_eq!(largest_prime_factor(13_195), 29);
    }

    #[test]
    fn test_answer() {
        assert_eq!(largest_prime_factor(600_851_475_143), 6857);
    }
}
