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

//! # Problem 39: Integer right triangles
//!
//! For which perimeter p <= 1000 is the number of right triangles with
//! integral sides maximised?

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::arith::exact_isqrt;

fn solution_counts(max_perimeter: usize) -> Vec<u32> {
    let mut counts = vec![0u32; max_perimeter + 1];
    let half = (max_perimeter / 2) as u64;
    for a in 1..=half {
        for b in a..=half {
            if let Some(c) = exact_isqrt(a * a + b * b) {
                let perimeter = (a + b + c) as usize;
                if perimeter <= max_perimeter {
                    counts[perimeter] += 1;
                }
            }
        }
    }
    counts
}

fn most_solutions_perimeter(max_perimeter: usize) -> usize {
    let counts = solution_counts(max_perimeter);
    counts
        .iter()
        .enumerate()
        .max_by_key(|&(_, &count)| count)
        .map(|(perimeter, _)| perimeter)
        .expect("the count table is nonempty")
}

/// Finds the perimeter below 1000 with the most right-triangle solutions.
pub struct IntegerRightTriangles;

impl Problem for IntegerRightTriangles {
    fn id(&self) -> u32 {
        39
    }

    fn title(&self) -> &'static str {
        "Integer right triangles"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(most_solutions_perimeter(1000) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // p = 120 has exactly three solutions: {20,48,52}, {24,45,51},
        // {30,40,50}.
        assert_eq!(solution_counts(1000)[120], 3);
    }

    #[test]
    fn test_answer() {
        assert_eq!(most_solutions_perimeter(1000), 840);
    }
}
