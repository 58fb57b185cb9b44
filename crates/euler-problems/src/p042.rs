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

//! # Problem 42: Coded triangle numbers
//!
//! How many words in the bundled list have a word value (sum of letter
//! positions) equal to a triangle number?

use crate::data::read_quoted_list;
use crate::problem::{Answer, Problem, SolveContext, SolveError};
use euler_core::figurate::is_triangle;

fn word_value(word: &str) -> u64 {
    word.bytes().map(|b| u64::from(b - b'A' + 1)).sum()
}

fn triangle_word_count(words: &[String]) -> usize {
    words
        .iter()
        .filter(|word| is_triangle(word_value(word)))
        .count()
}

/// Counts the triangle words in the bundled word list.
pub struct CodedTriangleNumbers;

impl Problem for CodedTriangleNumbers {
    fn id(&self) -> u32 {
        42
    }

    fn title(&self) -> &'static str {
        "Coded triangle numbers"
    }

    fn solve(&self, ctx: &SolveContext) -> Result<Answer, SolveError> {
        let words = read_quoted_list(&ctx.data_file("words.txt"))?;
        Ok(triangle_word_count(&words) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        // SKY = 19 + 11 + 25 = 55 = t10.
        assert_eq!(word_value("SKY"), 55);
        assert!(is_triangle(word_value("SKY")));
    }

    #[test]
    fn test_counting() {
        let words = vec!["SKY".to_string(), "A".to_string(), "AB".to_string()];
        // SKY -> 55 and A -> 1 are triangular, AB -> 3 also is.
        assert_eq!(triangle_word_count(&words), 3);
    }

    #[test]
    fn test_answer_against_bundled_data() {
        let ctx = SolveContext::discover().expect("workspace data dir");
        assert_eq!(CodedTriangleNumbers.solve(&ctx).unwrap(), 56);
    }
}
