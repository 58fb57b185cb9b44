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

//! # Run Report
//!
//! Per-problem records and the aggregate report a harness run produces. A
//! record pairs the computed answer (or the error) with its timing and a
//! verdict against the answer key; the report preserves the order the
//! problems were requested in.

use crate::stats::RunStatistics;
use euler_problems::{Answer, SolveError};
use std::time::Duration;

/// How a computed answer relates to the recorded answer key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The answer matches the key.
    Verified,
    /// The answer contradicts the key.
    Mismatch {
        /// The recorded expected answer.
        expected: Answer,
    },
    /// The key has no entry for this problem.
    Unverified,
    /// The solve returned an error, so there is nothing to compare.
    Failed,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Verified => write!(f, "verified"),
            Verdict::Mismatch { expected } => write!(f, "mismatch (expected {expected})"),
            Verdict::Unverified => write!(f, "unverified"),
            Verdict::Failed => write!(f, "failed"),
        }
    }
}

/// The outcome of one problem's solve.
#[derive(Debug)]
pub struct RunRecord {
    /// The problem id.
    pub id: u32,
    /// The problem title.
    pub title: String,
    /// The computed answer, or the error the solve produced.
    pub outcome: Result<Answer, SolveError>,
    /// Wall-clock duration of the solve.
    pub elapsed: Duration,
    /// The comparison against the answer key.
    pub verdict: Verdict,
}

impl RunRecord {
    /// Returns true when the solve produced an answer that is not
    /// contradicted by the key.
    #[inline]
    pub fn is_acceptable(&self) -> bool {
        matches!(self.verdict, Verdict::Verified | Verdict::Unverified)
    }

    /// Renders the record as a JSON value for machine-readable output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut value = serde_json::json!({
            "id": self.id,
            "title": self.title,
            "elapsed_secs": self.elapsed.as_secs_f64(),
            "verdict": self.verdict.to_string(),
        });
        match &self.outcome {
            Ok(answer) => value["answer"] = serde_json::json!(answer),
            Err(error) => value["error"] = serde_json::json!(error.to_string()),
        }
        value
    }
}

impl std::fmt::Display for RunRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.outcome {
            Ok(answer) => write!(
                f,
                "problem {:3}: {} ({:.2} s) [{}]",
                self.id,
                answer,
                self.elapsed.as_secs_f64(),
                self.verdict
            ),
            Err(error) => write!(
                f,
                "problem {:3}: error: {} ({:.2} s)",
                self.id,
                error,
                self.elapsed.as_secs_f64()
            ),
        }
    }
}

/// The outcome of a whole harness run, in request order.
#[derive(Debug)]
pub struct RunReport {
    records: Vec<RunRecord>,
    statistics: RunStatistics,
}

impl RunReport {
    /// Assembles a report from records and their aggregate statistics.
    #[inline]
    pub fn new(records: Vec<RunRecord>, statistics: RunStatistics) -> Self {
        Self {
            records,
            statistics,
        }
    }

    /// The per-problem records, in the order the problems were run.
    #[inline]
    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    /// The aggregate statistics.
    #[inline]
    pub fn statistics(&self) -> &RunStatistics {
        &self.statistics
    }

    /// Returns true when no record is a mismatch or a failure.
    #[inline]
    pub fn all_acceptable(&self) -> bool {
        self.records.iter().all(RunRecord::is_acceptable)
    }

    /// Iterates the records that contradict the key or failed to solve.
    pub fn offenders(&self) -> impl Iterator<Item = &RunRecord> {
        self.records.iter().filter(|r| !r.is_acceptable())
    }
}

impl std::fmt::Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for record in &self.records {
            writeln!(f, "{record}")?;
        }
        write!(f, "{}", self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::RunStatisticsBuilder;

    fn record(id: u32, verdict: Verdict) -> RunRecord {
        RunRecord {
            id,
            title: format!("problem {id}"),
            outcome: Ok(42),
            elapsed: Duration::from_millis(1),
            verdict,
        }
    }

    #[test]
    fn test_acceptable_verdicts() {
        assert!(record(1, Verdict::Verified).is_acceptable());
        assert!(record(1, Verdict::Unverified).is_acceptable());
        assert!(!record(1, Verdict::Mismatch { expected: 7 }).is_acceptable());
        assert!(!record(1, Verdict::Failed).is_acceptable());
    }

    #[test]
    fn test_report_preserves_order_and_finds_offenders() {
        let records = vec![
            record(3, Verdict::Verified),
            record(1, Verdict::Mismatch { expected: 7 }),
            record(2, Verdict::Verified),
        ];
        let report = RunReport::new(records, RunStatisticsBuilder::new().build());
        let ids: Vec<u32> = report.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert!(!report.all_acceptable());
        let offenders: Vec<u32> = report.offenders().map(|r| r.id).collect();
        assert_eq!(offenders, vec![1]);
    }

    #[test]
    fn test_record_display_mentions_the_verdict() {
        let rendered = record(12, Verdict::Verified).to_string();
        assert!(rendered.contains("problem  12"));
        assert!(rendered.contains("[verified]"));
    }

    #[test]
    fn test_record_json_contains_answer() {
        let value = record(5, Verdict::Verified).to_json();
        assert_eq!(value["id"], 5);
        assert_eq!(value["answer"], 42);
        assert!(value["error"].is_null());
    }
}
