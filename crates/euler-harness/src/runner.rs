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

//! # Runner
//!
//! Walks a selection of problems, times every solve, and produces a
//! `RunReport`. The runner owns the solve context and (optionally) the
//! answer key; problems stay plain trait objects.
//!
//! There is no mid-solve abort: a solution is an opaque function call, so
//! the runner can only observe its duration afterwards. Solves slower than
//! the configured threshold get a warning event instead.

use crate::answer_key::{AnswerKey, AnswerKeyError};
use crate::report::{RunRecord, RunReport, Verdict};
use crate::stats::RunStatisticsBuilder;
use euler_problems::{Problem, SolveContext, SolveError};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// The error type for runner construction.
#[derive(Debug)]
pub enum RunnerError {
    /// The solve context could not be created.
    Context(SolveError),
    /// The answer key could not be loaded.
    Key(AnswerKeyError),
}

impl std::fmt::Display for RunnerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Context(e) => write!(f, "solve context error: {e}"),
            Self::Key(e) => write!(f, "answer key error: {e}"),
        }
    }
}

impl std::error::Error for RunnerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Context(e) => Some(e),
            Self::Key(e) => Some(e),
        }
    }
}

impl From<SolveError> for RunnerError {
    fn from(e: SolveError) -> Self {
        Self::Context(e)
    }
}

impl From<AnswerKeyError> for RunnerError {
    fn from(e: AnswerKeyError) -> Self {
        Self::Key(e)
    }
}

/// Runs problems, times them, and verifies their answers.
#[derive(Debug)]
pub struct Runner {
    ctx: SolveContext,
    key: Option<AnswerKey>,
    slow_threshold: Duration,
}

impl Runner {
    /// Starts configuring a runner.
    #[inline]
    pub fn builder() -> RunnerBuilder {
        RunnerBuilder::new()
    }

    /// The solve context problems receive.
    #[inline]
    pub fn context(&self) -> &SolveContext {
        &self.ctx
    }

    /// The answer key, when one was loaded.
    #[inline]
    pub fn answer_key(&self) -> Option<&AnswerKey> {
        self.key.as_ref()
    }

    /// Runs the given problems in order and assembles the report.
    pub fn run(&self, problems: &[Box<dyn Problem>]) -> RunReport {
        let mut stats = RunStatisticsBuilder::new();
        let mut records = Vec::with_capacity(problems.len());
        for problem in problems {
            records.push(self.run_one(problem.as_ref(), &mut stats));
        }
        RunReport::new(records, stats.build())
    }

    fn run_one(&self, problem: &dyn Problem, stats: &mut RunStatisticsBuilder) -> RunRecord {
        let id = problem.id();
        let start = Instant::now();
        let outcome = problem.solve(&self.ctx);
        let elapsed = start.elapsed();
        stats.record_duration(elapsed);

        let verdict = match &outcome {
            Ok(answer) => match self.key.as_ref().and_then(|key| key.expected(id)) {
                Some(expected) if expected == *answer => {
                    stats.record_verified();
                    Verdict::Verified
                }
                Some(expected) => {
                    stats.record_mismatch();
                    tracing::warn!(id, answer = *answer, expected, "answer contradicts the key");
                    Verdict::Mismatch { expected }
                }
                None => {
                    stats.record_unverified();
                    Verdict::Unverified
                }
            },
            Err(error) => {
                stats.record_failure();
                tracing::warn!(id, %error, "solve failed");
                Verdict::Failed
            }
        };

        if let Ok(answer) = &outcome {
            tracing::info!(
                id,
                answer = *answer,
                elapsed_secs = elapsed.as_secs_f64(),
                "solved"
            );
        }
        if elapsed > self.slow_threshold {
            tracing::warn!(
                id,
                elapsed_secs = elapsed.as_secs_f64(),
                threshold_secs = self.slow_threshold.as_secs_f64(),
                "slow solve"
            );
        }

        RunRecord {
            id,
            title: problem.title().to_string(),
            outcome,
            elapsed,
            verdict,
        }
    }
}

/// Builder for [`Runner`].
#[derive(Debug, Default)]
pub struct RunnerBuilder {
    data_dir: Option<PathBuf>,
    key_path: Option<PathBuf>,
    key: Option<AnswerKey>,
    key_path_from_data: bool,
    slow_threshold: Option<Duration>,
}

impl RunnerBuilder {
    /// Creates an empty builder.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the auto-discovered data directory.
    #[inline]
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Loads the answer key from an explicit path at build time.
    #[inline]
    pub fn answer_key_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.key_path = Some(path.into());
        self
    }

    /// Uses an already-loaded answer key.
    #[inline]
    pub fn answer_key(mut self, key: AnswerKey) -> Self {
        self.key = Some(key);
        self
    }

    /// Loads the bundled `answers.json` from the data directory.
    #[inline]
    pub fn bundled_answer_key(mut self) -> Self {
        self.key_path = None;
        self.key = None;
        self.key_path_from_data = true;
        self
    }

    /// Sets the duration above which a solve is logged as slow.
    #[inline]
    pub fn slow_threshold(mut self, threshold: Duration) -> Self {
        self.slow_threshold = Some(threshold);
        self
    }

    /// Builds the runner, discovering the data directory and loading the
    /// answer key as configured.
    pub fn build(self) -> Result<Runner, RunnerError> {
        let ctx = match self.data_dir {
            Some(dir) => SolveContext::new(dir),
            None => SolveContext::discover()?,
        };
        let key = match (self.key, self.key_path) {
            (Some(key), _) => Some(key),
            (None, Some(path)) => Some(AnswerKey::load(&path)?),
            (None, None) if self.key_path_from_data => {
                Some(AnswerKey::load(&ctx.data_file("answers.json"))?)
            }
            (None, None) => None,
        };
        Ok(Runner {
            ctx,
            key,
            slow_threshold: self.slow_threshold.unwrap_or(Duration::from_secs(5)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use euler_problems::Answer;

    struct Stub(u32, Result<Answer, ()>);

    impl Problem for Stub {
        fn id(&self) -> u32 {
            self.0
        }

        fn title(&self) -> &'static str {
            "stub"
        }

        fn solve(&self, _ctx: &SolveContext) -> Result<Answer, SolveError> {
            self.1
                .map_err(|_| SolveError::malformed("stub", "forced failure"))
        }
    }

    fn runner_with_key(key: AnswerKey) -> Runner {
        Runner::builder()
            .data_dir("/nonexistent")
            .answer_key(key)
            .build()
            .expect("explicit data dir never fails")
    }

    #[test]
    fn test_verdicts_cover_all_cases() {
        let key = AnswerKey::from_entries([(1, 10), (2, 99)]);
        let runner = runner_with_key(key);
        let problems: Vec<Box<dyn Problem>> = vec![
            Box::new(Stub(1, Ok(10))),  // verified
            Box::new(Stub(2, Ok(11))),  // mismatch
            Box::new(Stub(3, Ok(12))),  // unverified
            Box::new(Stub(4, Err(()))), // failed
        ];
        let report = runner.run(&problems);
        assert_eq!(report.records().len(), 4);
        assert_eq!(report.records()[0].verdict, Verdict::Verified);
        assert_eq!(
            report.records()[1].verdict,
            Verdict::Mismatch { expected: 99 }
        );
        assert_eq!(report.records()[2].verdict, Verdict::Unverified);
        assert_eq!(report.records()[3].verdict, Verdict::Failed);
        let stats = report.statistics();
        assert_eq!(stats.problems_run, 4);
        assert_eq!(stats.verified, 1);
        assert_eq!(stats.mismatched, 1);
        assert_eq!(stats.unverified, 1);
        assert_eq!(stats.failed, 1);
    }

    #[test]
    fn test_runner_without_key_reports_unverified() {
        let runner = Runner::builder()
            .data_dir("/nonexistent")
            .build()
            .expect("explicit data dir never fails");
        let problems: Vec<Box<dyn Problem>> = vec![Box::new(Stub(1, Ok(10)))];
        let report = runner.run(&problems);
        assert_eq!(report.records()[0].verdict, Verdict::Unverified);
        assert!(report.all_acceptable());
    }

    #[test]
    fn test_report_order_matches_request_order() {
        let runner = runner_with_key(AnswerKey::default());
        let problems: Vec<Box<dyn Problem>> = vec![
            Box::new(Stub(9, Ok(1))),
            Box::new(Stub(3, Ok(1))),
            Box::new(Stub(7, Ok(1))),
        ];
        let ids: Vec<u32> = runner.run(&problems).records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 3, 7]);
    }
}
