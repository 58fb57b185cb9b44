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

//! # Problem 31: Coin sums
//!
//! How many different ways can two pounds be made using any number of the
//! eight coins in general circulation?

use crate::problem::{Answer, Problem, SolveContext, SolveError};

const COINS: [usize; 8] = [1, 2, 5, 10, 20, 50, 100, 200];

fn coin_ways(target: usize, coins: &[usize]) -> u64 {
    let mut ways = vec![0u64; target + 1];
    ways[0] = 1;
    for &coin in coins {
        for amount in coin..=target {
            ways[amount] += ways[amount - coin];
        }
    }
    ways[target]
}

/// Counts the ways of making two pounds from standard coins.
pub struct CoinSums;

impl Problem for CoinSums {
    fn id(&self) -> u32 {
        31
    }

    fn title(&self) -> &'static str {
        "Coin sums"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(coin_ways(200, &COINS) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_targets() {
        // 5p: 5, 2+2+1, 2+1+1+1, 1x5.
        assert_eq!(coin_ways(5, &COINS), 4);
        assert_eq!(coin_ways(1, &COINS), 1);
        assert_eq!(coin_ways(0, &COINS), 1);
    }

    #[test]
    fn test_answer() {
        assert_eq!(coin_ways(200, &COINS), 73_682);
    }
}
