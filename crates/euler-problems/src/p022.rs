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

//! # Problem 22: Names scores
//!
//! Sort the bundled name list, multiply each name's alphabetical value by
//! its position, and total the scores.

use crate::data::read_quoted_list;
use crate::problem::{Answer, Problem, SolveContext, SolveError};

fn alphabetical_value(name: &str) -> u64 {
    name.bytes().map(|b| u64::from(b - b'A' + 1)).sum()
}

fn total_name_score(names: &mut [String]) -> u64 {
    names.sort_unstable();
    names
        .iter()
        .enumerate()
        .map(|(i, name)| (i as u64 + 1) * alphabetical_value(name))
        .sum()
}

/// Totals the positional name scores of the bundled name list.
pub struct NamesScores;

impl Problem for NamesScores {
    fn id(&self) -> u32 {
        22
    }

    fn title(&self) -> &'static str {
        "Names scores"
    }

    fn solve(&self, ctx: &SolveContext) -> Result<Answer, SolveError> {
        let mut names = read_quoted_list(&ctx.data_file("names.txt"))?;
        Ok(total_name_score(&mut names) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example_value() {
        // COLIN is worth 3 + 15 + 12 + 9 + 14 = 53.
        assert_eq!(alphabetical_value("COLIN"), 53);
    }

    #[test]
    fn test_scores_weight_by_sorted_position() {
        let mut names = vec!["COLIN".to_string(), "ANNA".to_string()];
        // ANNA = 1 + 14 + 14 + 1 = 30 at position 1, COLIN = 53 at position 2.
        assert_eq!(total_name_score(&mut names), 30 + 2 * 53);
    }

    #[test]
    fn test_answer_against_bundled_data() {
        let ctx = SolveContext::discover().expect("workspace data dir");
        assert_eq!(NamesScores.solve(&ctx).unwrap(), 1_442_757);
    }
}
