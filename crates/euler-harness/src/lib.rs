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

//! # Euler Harness
//!
//! The thin orchestration layer over the solution collection: a `Runner`
//! that walks a selection of problems, times every solve, checks each
//! result against the recorded answer key, and aggregates the outcome into
//! a report with summary statistics.
//!
//! ## Modules
//!
//! - `answer_key`: The `answers.json` lookup table.
//! - `report`: Per-problem `RunRecord`s, `Verdict`s, and the `RunReport`.
//! - `stats`: Aggregate `RunStatistics` with a builder.
//! - `runner`: The `Runner` and its builder.

pub mod answer_key;
pub mod report;
pub mod runner;
pub mod stats;

pub use answer_key::{AnswerKey, AnswerKeyError};
pub use report::{RunRecord, RunReport, Verdict};
pub use runner::{Runner, RunnerBuilder, RunnerError};
pub use stats::{RunStatistics, RunStatisticsBuilder};
