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

//! The `euler run` subcommand.

use crate::commands::select;
use clap::Args;
use euler_harness::Runner;
use std::path::PathBuf;

/// Solves problems and prints each answer with its timing.
#[derive(Args)]
pub struct RunCommand {
    /// Problem ids to solve (default: the whole collection)
    ids: Vec<u32>,
}

impl RunCommand {
    pub fn run(self, data_dir: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
        let problems = select(&self.ids)?;
        let mut builder = Runner::builder();
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
        Ok(())
    }
}
