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

//! # Problem 17: Number letter counts
//!
//! If all the numbers from 1 to 1000 inclusive were written out in words
//! (British usage, with "and"), how many letters would be used?

use crate::problem::{Answer, Problem, SolveContext, SolveError};

const UNITS: [&str; 20] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

fn spell_out(n: u64) -> String {
    match n {
        1..=19 => UNITS[n as usize].to_string(),
        20..=99 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                units => format!("{tens}-{}", UNITS[units as usize]),
            }
        }
        100..=999 => {
            let hundreds = format!("{} hundred", UNITS[(n / 100) as usize]);
            match n % 100 {
                0 => hundreds,
                rest => format!("{hundreds} and {}", spell_out(rest)),
            }
        }
        1000 => "one thousand".to_string(),
        _ => unreachable!("only 1..=1000 is ever spelled out"),
    }
}

fn letter_count(word: &str) -> usize {
    word.chars().filter(|c| !matches!(c, ' ' | '-')).count()
}

fn total_letters(limit: u64) -> usize {
    (1..=limit).map(|n| letter_count(&spell_out(n))).sum()
}

/// Counts the letters used spelling out 1 to 1000.
pub struct NumberLetterCounts;

impl Problem for NumberLetterCounts {
    fn id(&self) -> u32 {
        17
    }

    fn title(&self) -> &'static str {
        "Number letter counts"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(total_letters(1000) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spelling() {
        assert_eq!(spell_out(342), "three hundred and forty-two");
        assert_eq!(spell_out(115), "one hundred and fifteen");
        assert_eq!(spell_out(1000), "one thousand");
    }

    #[test]
    fn test_documented_letter_counts() {
        // Spaces and hyphens are not counted.
        assert_eq!(letter_count(&spell_out(342)), 23);
        assert_eq!(letter_count(&spell_out(115)), 20);
        assert_eq!(total_letters(5), 19);
    }

    #[test]
    fn test_answer() {
        assert_eq!(total_letters(1000), 21_124);
    }
}
