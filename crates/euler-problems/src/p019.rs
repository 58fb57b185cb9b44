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

//! # Problem 19: Counting Sundays
//!
//! How many Sundays fell on the first of the month during the twentieth
//! century (1 Jan 1901 to 31 Dec 2000)?

use crate::problem::{Answer, Problem, SolveContext, SolveError};
use chrono::{Datelike, NaiveDate, Weekday};

fn sundays_on_the_first(from_year: i32, to_year: i32) -> u64 {
    let mut count = 0;
    for year in from_year..=to_year {
        for month in 1..=12 {
            let first = NaiveDate::from_ymd_opt(year, month, 1)
                .expect("the first of every month is a valid date");
            if first.weekday() == Weekday::Sun {
                count += 1;
            }
        }
    }
    count
}

/// Counts month-starting Sundays across the twentieth century.
pub struct CountingSundays;

impl Problem for CountingSundays {
    fn id(&self) -> u32 {
        19
    }

    fn title(&self) -> &'static str {
        "Counting Sundays"
    }

    fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
        Ok(sundays_on_the_first(1901, 2000) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_the_given_anchor_date() {
        // 1 Jan 1900 was a Monday.
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        assert_eq!(date.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_single_year() {
        // 1901: Sep 1, Dec 1.
        assert_eq!(sundays_on_the_first(1901, 1901), 2);
    }

    #[test]
    fn test_answer() {
        assert_eq!(sundays_on_the_first(1901, 2000), 171);
    }
}
