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

//! # Problem 35: Circular primes
//!
//! How many circular primes are there below one million? A prime is circular
//! when every rotation of its digits is prime.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::digits::digit_count;
use euler_core::primes::Sieve;

fn is_circular(p: u64, sieve: &Sieve) -> bool {
    let len = digit_count(p);
    let shift = 10u64.pow(len - 1);
    let mut rotation = p;
    for _ in 1..len {
        rotation = rotation / 10 + (rotation % 10) * shift;
        if !sieve.contains(rotation) {
            return false;
        }
    }
    true
}

fn circular_prime_count(limit: usize) -> usize {
    let sieve = Sieve::below(limit);
    sieve.iter().filter(|&p| is_circular(p, &sieve)).count()
}

/// Counts the circular primes below one million.
pub struct CircularPrimes;

impl Problem for CircularPrimes {
    fn id(&self) -> u32 {
        35
    }

    fn title(&self) -> &'static str {
        "Circular primes"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(circular_prime_count(1_000_000) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // 2, 3, 5, 7, 11, 13, 17, 31, 37, 71, 73, 79, 97.
        assert_eq!(circular_prime_count(100), 13);
    }

    #[test]
    fn test_rotations_of_197() {
        let sieve = Sieve::below(1000);
        assert!(is_circular(197, &sieve));
        assert!(!is_circular(19, &sieve)); // 91 = 7 * 13
    }
}
