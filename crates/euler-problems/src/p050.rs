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

//! # Problem 50: Consecutive prime sum
//!
//! Which prime below one million can be written as the sum of the most
//! consecutive primes?

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::primes::Sieve;

fn longest_consecutive_prime_sum(limit: usize) -> u64 {
    let sieve = Sieve::below(limit);
    let primes = sieve.primes();
    let mut prefix = Vec::with_capacity(primes.len() + 1);
    prefix.push(0u64);
    for &p in &primes {
        prefix.push(prefix.last().expect("prefix is nonempty") + p);
    }
    // The longest possible window is bounded by the first window that
    // already overshoots the limit.
    let mut window = prefix
        .iter()
        .position(|&sum| sum >= limit as u64)
        .unwrap_or(primes.len());
    while window > 0 {
        for start in 0..=primes.len() - window {
            let sum = prefix[start + window] - prefix[start];
            if sum >= limit as u64 {
                break;
            }
            if sieve.contains(sum) {
                return sum;
            }
        }
        window -= 1;
    }
    unreachable!("every prime is a window of length one")
}

/// Finds the prime below one million with the longest prime-window sum.
pub struct ConsecutivePrimeSum;

impl Problem for ConsecutivePrimeSum {
    fn id(&self) -> u32 {
        50
    }

    fn title(&self) -> &'static str {
        "Consecutive prime sum"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(longest_consecutive_prime_sum(1_000_000) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_examples() {
        // 41 = 2 + 3 + 5 + 7 + 11 + 13, the longest below one hundred.
        assert_eq!(longest_consecutive_prime_sum(100), 41);
        // 953 spans 21 terms, the longest below one thousand.
        assert_eq!(longest_consecutive_prime_sum(1000), 953);
    }

    #[test]
    fn test_answer() {
        assert_eq!(longest_consecutive_prime_sum(1_000_000), 997_651);
    }
}
