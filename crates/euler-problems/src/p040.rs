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

//! # Problem 40: Champernowne's constant
//!
//! In the fractional digits 0.123456789101112..., find the product
//! d1 * d10 * d100 * ... * d1000000.

use crate::problem::{Answer, Problem, SolveContext, SolveError};

fn champernowne_digits(count: usize) -> Vec<u8> {
    let mut digits = Vec::with_capacity(count + 10);
    let mut n: u64 = 1;
    while digits.len() <= count {
        let mut buffer = [0u8; 20];
        let mut len = 0;
        let mut m = n;
        while m > 0 {
            buffer[len] = (m % 10) as u8;
            m /= 10;
            len += 1;
        }
        digits.extend(buffer[..len].iter().rev());
        n += 1;
    }
    digits
}

fn index_digit_product(max_power: u32) -> u64 {
    let digits = champernowne_digits(10usize.pow(max_power));
    (0..=max_power)
        .map(|power| u64::from(digits[10usize.pow(power) - 1]))
        .product()
}

/// Multiplies the decimal digits of Champernowne's constant at powers of
/// ten.
pub struct ChampernownesConstant;

impl Problem for ChampernownesConstant {
    fn id(&self) -> u32 {
        40
    }

    fn title(&self) -> &'static str {
        "Champernowne's constant"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(index_digit_product(6) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // The 12th fractional digit is 1.
        assert_eq!(champernowne_digits(12)[11], 1);
    }

    #[test]
    fn test_digit_stream_prefix() {
        assert_eq!(
            champernowne_digits(15)[..15],
            [1, 2, 3, 4, 5, 6, 7, 8, 9, 1, 0, 1, 1, 1, 2]
        );
    }

    #[test]
    fn test_answer() {
        assert_eq!(index_digit_product(6), 210);
    }
}
