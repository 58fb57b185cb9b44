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

//! # Problem 49: Prime permutations
//!
//! Besides 1487, 4817, 8147, one other arithmetic sequence of three 4-digit
//! primes with step 3330 consists of digit permutations of each other.
//! Concatenate its three terms.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::digits::digit_signature;
use euler_core::primes::Sieve;

const STEP: u64 = 3330;

fn other_permutation_sequence() -> Option<u64> {
    let sieve = Sieve::below(10_000);
    for p in sieve.iter().filter(|&p| p >= 1000) {
        if p == 1487 {
            continue; // the documented sequence
        }
        let (q, r) = (p + STEP, p + 2 * STEP);
        if sieve.contains(q)
            && sieve.contains(r)
            && digit_signature(p) == digit_signature(q)
            && digit_signature(p) == digit_signature(r)
        {
            return Some(p * 100_000_000 + q * 10_000 + r);
        }
    }
    None
}

/// Concatenates the undocumented 4-digit prime permutation sequence.
pub struct PrimePermutations;

impl Problem for PrimePermutations {
    fn id(&self) -> u32 {
        49
    }

    fn title(&self) -> &'static str {
        "Prime permutations"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        let concatenated =
            other_permutation_sequence().expect("the second sequence exists below 10000");
        Ok(concatenated as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use euler_core::primes::is_prime;

    #[test]
    fn test_documented_sequence() {
        assert!(is_prime(1487) && is_prime(4817) && is_prime(8147));
        assert_eq!(digit_signature(1487), digit_signature(4817));
        assert_eq!(digit_signature(1487), digit_signature(8147));
    }

    #[test]
    fn test_answer() {
        assert_eq!(other_permutation_sequence(), Some(296_962_999_629));
    }
}
