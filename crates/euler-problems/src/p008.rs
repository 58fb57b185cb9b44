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

//! # Problem 8: Largest product in a series
//!
//! Find the greatest product of five consecutive digits in the 1000-digit
//! number.

use crate::problem::{Answer, Problem, SolveContext, SolveError};

const THOUSAND_DIGITS: &str = concat!(
    "73167176531330624919225119674426574742355349194934",
    "96983520312774506326239578318016984801869478851843",
    "85861560789112949495459501737958331952853208805511",
    "12540698747158523863050715693290963295227443043557",
    "66896648950445244523161731856403098711121722383113",
    "62229893423380308135336276614282806444486645238749",
    "30358907296290491560440772390713810515859307960866",
    "70172427121883998797908792274921901699720888093776",
    "65727333001053367881220235421809751254540594752243",
    "52584907711670556013604839586446706324415722155397",
    "53697817977846174064955149290862569321978468622482",
    "83972241375657056057490261407972968652414535100474",
    "82166370484403199890008895243450658541227588666881",
    "16427171479924442928230863465674813919123162824586",
    "17866458359124566529476545682848912883142607690042",
    "24219022671055626321111109370544217506941658960408",
    "07198403850962455444362981230987879927244284909188",
    "84580156166097919133875499200524063689912560717606",
    "05886116467109405077541002256983155200055935729725",
    "71636269561882670428252483600823257530420752963450",
);

fn greatest_window_product(digits: &str, window: usize) -> u64 {
    let values: Vec<u64> = digits.bytes().map(|b| u64::from(b - b'0')).collect();
    values
        .windows(window)
        .map(|w| w.iter().product())
        .max()
        .unwrap_or(0)
}

/// Finds the greatest product of five adjacent digits in a fixed series.
pub struct LargestProductInASeries;

impl Problem for LargestProductInASeries {
    fn id(&self) -> u32 {
        8
    }

    fn title(&self) -> &'static str {
        "Largest product in a series"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        debug_assert_eq!(THOUSAND_DIGITS.len(), 1000);
        Ok(greatest_window_product(THOUSAND_DIGITS, 5) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_has_one_thousand_digits() {
        assert_eq!(THOUSAND_DIGITS.len(), 1000);
        assert!(THOUSAND_DIGITS.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn test_window_product_on_short_series() {
        assert_eq!(greatest_window_product("123456", 3), 120);
        assert_eq!(greatest_window_product("905", 2), 0);
    }

    #[test]
    fn test_answer() {
        assert_eq!(greatest_window_product(THOUSAND_DIGITS, 5), 40_824);
    }
}
