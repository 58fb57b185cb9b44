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

//! # Problem 15: Lattice paths
//!
//! Count the routes from the top-left to the bottom-right corner of a 20x20
//! grid, moving only right and down.

use crate::problem::{Answer, Problem, SolveContext, SolveError};

fn lattice_paths(size: usize) -> u64 {
    let nodes = size + 1;
    let mut grid = vec![vec![0u64; nodes]; nodes];
    for i in 0..nodes {
        grid[0][i] = 1;
        grid[i][0] = 1;
    }
    for i in 1..nodes {
        for j in 1..nodes {
            grid[i][j] = grid[i - 1][j] + grid[i][j - 1];
        }
    }
    grid[size][size]
}

/// Counts monotone routes through a 20x20 grid.
pub struct LatticePaths;

impl Problem for LatticePaths {
    fn id(&self) -> u32 {
        15
    }

    fn title(&self) -> &'static str {
        "Lattice paths"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(lattice_paths(20) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // A 2x2 grid has 6 routes.
        assert_eq!(lattice_paths(2), 6);
    }

    #[test]
    fn test_single_cell_grid() {
        assert_eq!(lattice_paths(1), 2);
    }

    #[test]
    fn test_answer() {
        assert_eq!(lattice_paths(20), 137_846_528_820);
    }
}
