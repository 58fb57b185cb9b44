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

//! # Problem 18: Maximum path sum I
//!
//! Find the maximum total from top to bottom of the triangle, moving to
//! adjacent numbers on the row below.

use crate::problem::{Answer, Problem, SolveContext, SolveError};

const TRIANGLE_TEXT: &str = "\
75
95 64
17 47 82
18 35 87 10
20 04 82 47 65
19 01 23 75 03 34
88 02 77 73 07 63 67
99 65 04 28 06 16 70 92
41 41 26 56 83 40 80 70 33
41 48 72 33 47 32 37 16 94 29
53 71 44 65 25 43 91 52 97 51 14
70 11 33 28 77 73 17 78 39 68 17 57
91 71 52 38 17 14 91 43 58 50 27 29 48
63 66 04 68 89 53 67 30 73 16 69 87 40 31
04 62 98 27 23 09 70 98 73 93 38 53 60 04 23";

fn parse_triangle(text: &str) -> Vec<Vec<u64>> {
    text.lines()
        .map(|line| {
            line.split_whitespace()
                .map(|token| token.parse().expect("triangle rows are numeric"))
                .collect()
        })
        .collect()
}

/// Folds the rows bottom-up, replacing each entry with the best total
/// reachable through it.
fn max_path_sum(triangle: &[Vec<u64>]) -> u64 {
    let mut best = triangle
        .last()
        .cloned()
        .expect("the triangle has at least one row");
    for row in triangle.iter().rev().skip(1) {
        best = row
            .iter()
            .enumerate()
            .map(|(i, &value)| value + best[i].max(best[i + 1]))
            .collect();
    }
    best[0]
}

/// Finds the best top-to-bottom path through a fifteen-row triangle.
pub struct MaximumPathSumI;

impl Problem for MaximumPathSumI {
    fn id(&self) -> u32 {
        18
    }

    fn title(&self) -> &'static str {
        "Maximum path sum I"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(max_path_sum(&parse_triangle(TRIANGLE_TEXT)) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // 3 + 7 + 4 + 9 = 23.
        let small = parse_triangle("3\n7 4\n2 4 6\n8 5 9 3");
        assert_eq!(max_path_sum(&small), 23);
    }

    #[test]
    fn test_triangle_shape() {
        let triangle = parse_triangle(TRIANGLE_TEXT);
        assert_eq!(triangle.len(), 15);
        for (i, row) in triangle.iter().enumerate() {
            assert_eq!(row.len(), i + 1);
        }
    }

    #[test]
    fn test_answer() {
        assert_eq!(max_path_sum(&parse_triangle(TRIANGLE_TEXT)), 1074);
    }
}
