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

//! # Problem 32: Pandigital products
//!
//! Find the sum of all products whose multiplicand/multiplier/product
//! identity uses each of the digits 1 through 9 exactly once.

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::digits::{unique_nonzero_digit_mask, PANDIGITAL_1_TO_9};
use rustc_hash::FxHashSet;

fn pandigital_product_sum() -> u64 {
    // Factors above four digits cannot leave room for a pandigital identity.
    let candidates: Vec<(u64, u16)> = (1..2000)
        .filter_map(|n| unique_nonzero_digit_mask(n).map(|mask| (n, mask)))
        .collect();
    let mut products: FxHashSet<u64> = FxHashSet::default();
    for (i, &(n, n_mask)) in candidates.iter().enumerate() {
        for &(m, m_mask) in &candidates[i..] {
            if n_mask & m_mask != 0 {
                continue;
            }
            let product = n * m;
            if let Some(p_mask) = unique_nonzero_digit_mask(product) {
                // The product must use exactly the digits the factors left.
                if p_mask == PANDIGITAL_1_TO_9 & !(n_mask | m_mask) {
                    products.insert(product);
                }
            }
        }
    }
    products.iter().sum()
}

/// Sums the products of 1-through-9 pandigital identities.
pub struct PandigitalProducts;

impl Problem for PandigitalProducts {
    fn id(&self) -> u32 {
        32
    }

    fn title(&self) -> &'static str {
        "Pandigital products"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(pandigital_product_sum() as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_identity_is_pandigital() {
        // 39 x 186 = 7254 uses each digit 1-9 once.
        let a = unique_nonzero_digit_mask(39).unwrap();
        let b = unique_nonzero_digit_mask(186).unwrap();
        let p = unique_nonzero_digit_mask(7254).unwrap();
        assert_eq!(a & b, 0);
        assert_eq!(p, PANDIGITAL_1_TO_9 & !(a | b));
    }

    #[test]
    fn test_answer() {
        assert_eq!(pandigital_product_sum(), 45_228);
    }
}
