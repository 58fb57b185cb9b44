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

//! # Problem 7: 10001st prime
//!
//! Find the 10001st prime number.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::primes::Sieve;

fn nth_prime(n: usize) -> u64 {
    // Double the sieve bound until it holds at least n primes.
    let mut bound = 2;
    loop {
        let sieve = Sieve::below(bound);
        if sieve.count() >= n {
            return sieve
                .iter()
                .nth(n - 1)
                .expect("sieve holds at least n primes");
        }
        bound *= 2;
    }
}

/// Finds the 10001st prime.
pub struct TenThousandFirstPrime;

impl Problem for TenThousandFirstPrime {
    fn id(&self) -> u32 {
        7
    }

    fn title(&self) -> &'static str {
        "10001st prime"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(nth_prime(10_001) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // The 6th prime is 13.
        assert_eq!(nth_prime(6), 13);
    }

    #[test]
    fn test_first_prime() {
        assert_eq!(nth_prime(1), 2);
    }

    #[test]
    fn test_answer() {
        assert_eq!(nth_prime(10_001), 104_743);
    }
}
