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

//! # Problem 41: Pandigital prime
//!
//! What is the largest n-digit pandigital prime (using digits 1 to n exactly
//! once)?
//!
//! Eight- and nine-digit pandigitals have digit sums divisible by three, so
//! those lengths fall out almost for free and the search settles at seven
//! digits.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::digits::from_digits;
use euler_core::primes::is_prime;
use euler_core::sequences::Permutations;

fn largest_pandigital_prime() -> u64 {
    for length in (1..=9u8).rev() {
        let digits: Vec<u8> = (1..=length).collect();
        let best = Permutations::starting_at(&digits)
            .map(|arrangement| from_digits(&arrangement))
            .filter(|&n| is_prime(n))
            .max();
        if let Some(prime) = best {
            return prime;
        }
    }
    unreachable!("single-digit pandigital primes exist")
}

/// Finds the largest pandigital prime.
pub struct PandigitalPrime;

impl Problem for PandigitalPrime {
    fn id(&self) -> u32 {
        41
    }

    fn title(&self) -> &'static str {
        "Pandigital prime"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(largest_pandigital_prime() as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use euler_core::digits::has_unique_digits;

    #[test]
    fn test_documented_example() {
        // 2143 is a 4-digit pandigital and prime.
        assert!(is_prime(2143));
        assert!(has_unique_digits(2143));
    }

    #[test]
    fn test_answer() {
        assert_eq!(largest_pandigital_prime(), 7_652_413);
    }
}
