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

//! The `euler verify` subcommand.

use crate::commands::select;
use anyhow::bail;
use clap::Args;
use euler_harness::Runner;
use std::path::PathBuf;

/// Solves problems and compares each answer against the recorded key.
#[derive(Args)]
pub struct VerifyCommand {
    /// Problem ids to verify (default: the whole collection)
    ids: Vec<u32>,
}

impl VerifyCommand {
    pub fn run(self, data_dir: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
        let problems = select(&self.ids)?;
        let mut builder = Runner::builder().bundled_answer_key();
        if let Some(dir) = data_dir {
            builder = builder.data_dir(dir);
        }
        let runner = builder.build()?;
        let report = runner.run(&problems);
        if json {
            for record in report.records() {
                println!("{}", record.to_json());
            }
        } else {
            println!("{report}");
        }
        if !report.all_acceptable() {
            let offenders: Vec<String> = report
                .offenders()
                .map(|record| format!("{:03}", record.id))
                .collect();
            bail!("verification failed for: {}", offenders.join(", "));
        }
        Ok(())
    }
}
