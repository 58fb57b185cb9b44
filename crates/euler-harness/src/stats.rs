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

//! # Run Statistics
//!
//! Aggregate counters for one harness run, collected through a builder and
//! rendered in the report footer.

use std::time::Duration;

/// Statistics collected while running a selection of problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStatistics {
    /// Number of problems run.
    pub problems_run: usize,
    /// Number of answers matching the answer key.
    pub verified: usize,
    /// Number of answers contradicting the answer key.
    pub mismatched: usize,
    /// Number of answers with no key entry to compare against.
    pub unverified: usize,
    /// Number of solves that returned an error.
    pub failed: usize,
    /// Total wall-clock duration of all solves.
    pub total_duration: Duration,
}

impl std::fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Run Statistics:")?;
        writeln!(f, "  Problems Run: {}", self.problems_run)?;
        writeln!(f, "  Verified: {}", self.verified)?;
        writeln!(f, "  Mismatched: {}", self.mismatched)?;
        writeln!(f, "  Unverified: {}", self.unverified)?;
        writeln!(f, "  Failed: {}", self.failed)?;
        write!(
            f,
            "  Total Duration (secs): {:.3}",
            self.total_duration.as_secs_f64()
        )
    }
}

/// Builder for `RunStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStatisticsBuilder {
    problems_run: usize,
    verified: usize,
    mismatched: usize,
    unverified: usize,
    failed: usize,
    total_duration: Duration,
}

impl Default for RunStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RunStatisticsBuilder {
    /// Creates a builder with zeroed counters.
    #[inline]
    pub fn new() -> Self {
        Self {
            problems_run: 0,
            verified: 0,
            mismatched: 0,
            unverified: 0,
            failed: 0,
            total_duration: Duration::ZERO,
        }
    }

    /// Counts one verified solve.
    #[inline]
    pub fn record_verified(&mut self) -> &mut Self {
        self.verified += 1;
        self
    }

    /// Counts one mismatched solve.
    #[inline]
    pub fn record_mismatch(&mut self) -> &mut Self {
        self.mismatched += 1;
        self
    }

    /// Counts one solve without a key entry.
    #[inline]
    pub fn record_unverified(&mut self) -> &mut Self {
        self.unverified += 1;
        self
    }

    /// Counts one failed solve.
    #[inline]
    pub fn record_failure(&mut self) -> &mut Self {
        self.failed += 1;
        self
    }

    /// Adds one problem's wall-clock time to the totals.
    #[inline]
    pub fn record_duration(&mut self, elapsed: Duration) -> &mut Self {
        self.problems_run += 1;
        self.total_duration += elapsed;
        self
    }

    /// Builds the final statistics.
    #[inline]
    pub fn build(&self) -> RunStatistics {
        RunStatistics {
            problems_run: self.problems_run,
            verified: self.verified,
            mismatched: self.mismatched,
            unverified: self.unverified,
            failed: self.failed,
            total_duration: self.total_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_accumulates_counters() {
        let mut builder = RunStatisticsBuilder::new();
        builder.record_duration(Duration::from_millis(5));
        builder.record_verified();
        builder.record_duration(Duration::from_millis(7));
        builder.record_failure();
        let stats = builder.build();
        assert_eq!(stats.problems_run, 2);
        assert_eq!(stats.verified, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.mismatched, 0);
        assert_eq!(stats.total_duration, Duration::from_millis(12));
    }

    #[test]
    fn test_display_includes_every_counter() {
        let stats = RunStatisticsBuilder::new().build();
        let rendered = stats.to_string();
        assert!(rendered.contains("Problems Run: 0"));
        assert!(rendered.contains("Verified: 0"));
        assert!(rendered.contains("Mismatched: 0"));
        assert!(rendered.contains("Unverified: 0"));
        assert!(rendered.contains("Failed: 0"));
        assert!(rendered.contains("Total Duration"));
    }
}
