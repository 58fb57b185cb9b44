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

//! # Problem 51: Prime digit replacements
//!
//! Find the smallest prime which, by replacing part of its digits with the
//! same digit, is part of an eight-prime value family.
//!
//! The last digit is never replaced: most of the ten candidates would be
//! even.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::digits::{digits, from_digits, DigitBuf};
use euler_core::primes::Sieve;
use euler_core::sequences::Arrangement;

/// Collects the primes obtained by writing the same digit into every
/// position selected by `position_mask` (bit i selects digit i, most
/// significant first). Leading zeros are skipped.
fn replacement_family(template: &DigitBuf, position_mask: u32, sieve: &Sieve) -> Arrangement {
    let mut family = Arrangement::new();
    let start_digit = if position_mask & 1 != 0 { 1 } else { 0 };
    for digit in start_digit..=9u8 {
        let mut candidate = template.clone();
        for (i, slot) in candidate.iter_mut().enumerate() {
            if position_mask & (1 << i) != 0 {
                *slot = digit;
            }
        }
        let value = from_digits(&candidate);
        if sieve.contains(value) {
            family.push(digit);
        }
    }
    family
}

fn smallest_family_prime(family_size: usize, limit: usize) -> u64 {
    let sieve = Sieve::below(limit);
    for p in sieve.iter() {
        let template = digits(p);
        let replaceable = template.len() - 1; // never the last digit
        for position_mask in 1u32..(1 << replaceable) {
            let family = replacement_family(&template, position_mask, &sieve);
            if family.len() == family_size {
                // The family member with the smallest written digit is the
                // smallest prime of the family.
                let mut smallest = template.clone();
                let digit = family[0];
                for (i, slot) in smallest.iter_mut().enumerate() {
                    if position_mask & (1 << i) != 0 {
                        *slot = digit;
                    }
                }
                return from_digits(&smallest);
            }
        }
    }
    unreachable!("an eight-prime family exists below the limit")
}

/// Finds the smallest prime of an eight-prime replacement family.
pub struct PrimeDigitReplacements;

impl Problem for PrimeDigitReplacements {
    fn id(&self) -> u32 {
        51
    }

    fn title(&self) -> &'static str {
        "Prime digit replacements"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(smallest_family_prime(8, 1_000_000) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_two_digit_family() {
        // *3 yields the six primes 13, 23, 43, 53, 73, 83.
        let sieve = Sieve::below(100);
        let family = replacement_family(&digits(13), 0b1, &sieve);
        assert_eq!(family.len(), 6);
    }

    #[test]
    fn test_documented_five_digit_family() {
        // 56**3 yields seven primes, starting at 56003.
        let sieve = Sieve::below(100_000);
        let family = replacement_family(&digits(56_003), 0b01100, &sieve);
        assert_eq!(family.len(), 7);
        assert_eq!(family[0], 0);
    }

    #[test]
    fn test_a_seven_prime_family_is_found_first_at_smaller_sizes() {
        assert_eq!(smallest_family_prime(7, 100_000), 56_003);
    }
}
