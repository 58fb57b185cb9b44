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

//! # Problem 33: Digit cancelling fractions
//!
//! Exactly four non-trivial two-digit fractions keep their value when a
//! shared digit is naively cancelled. Find the denominator of their product
//! in lowest terms.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::arith::gcd;

/// Cancels digit `d` from a two-digit number, returning the remaining digit.
///
/// `None` when both digits equal `d` (nothing is left).
fn cancel_digit(n: u64, d: u64) -> Option<u64> {
    let (tens, units) = (n / 10, n % 10);
    match (tens == d, units == d) {
        (true, true) => None,
        (true, false) => Some(units),
        (false, true) => Some(tens),
        (false, false) => Some(n),
    }
}

fn curious_fractions() -> Vec<(u64, u64)> {
    let mut found = Vec::new();
    for numerator in 10..100u64 {
        for denominator in numerator + 1..100 {
            // The single shared nonzero digit, if any.
            let num_digits = [numerator / 10, numerator % 10];
            let den_digits = [denominator / 10, denominator % 10];
            let shared: Vec<u64> = (1..=9)
                .filter(|d| num_digits.contains(d) && den_digits.contains(d))
                .collect();
            let [d] = shared.as_slice() else { continue };
            let (Some(n), Some(m)) = (cancel_digit(numerator, *d), cancel_digit(denominator, *d))
            else {
                continue;
            };
            if numerator * m == n * denominator {
                found.push((numerator, denominator));
            }
        }
    }
    found
}

fn reduced_denominator_product() -> u64 {
    let fractions = curious_fractions();
    debug_assert_eq!(fractions.len(), 4);
    let numerator_product: u64 = fractions.iter().map(|&(n, _)| n).product();
    let denominator_product: u64 = fractions.iter().map(|&(_, d)| d).product();
    denominator_product / gcd(numerator_product, denominator_product)
}

/// Reduces the product of the four curious cancelling fractions.
pub struct DigitCancellingFractions;

impl Problem for DigitCancellingFractions {
    fn id(&self) -> u32 {
        33
    }

    fn title(&self) -> &'static str {
        "Digit cancelling fractions"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(reduced_denominator_product() as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_the_four_curious_fractions() {
        assert_eq!(
            curious_fractions(),
            vec![(16, 64), (19, 95), (26, 65), (49, 98)]
        );
    }

    #[test]
    fn test_trivial_fractions_are_excluded() {
        // 30/50 shares only the digit zero, which does not count.
        assert!(!curious_fractions().contains(&(30, 50)));
    }

    #[test]
    fn test_answer() {
        assert_eq!(reduced_denominator_product(), 100);
    }
}
