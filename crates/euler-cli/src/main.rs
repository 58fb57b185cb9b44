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

//! Euler CLI - solve, time, and verify the puzzle collection.
//!
//! Usage:
//!   euler list                - List every problem in the collection
//!   euler run [IDS...]        - Solve problems (default: all) with timings
//!   euler verify [IDS...]     - Solve and compare against the answer key

use clap::{Parser, Subcommand};
use commands::{ListCommand, RunCommand, VerifyCommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "euler")]
#[command(about = "Project Euler solutions, timed and verified")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override the auto-discovered data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Emit machine-readable JSON instead of the text report
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every problem in the collection
    List(ListCommand),
    /// Solve problems and print each answer with its timing
    Run(RunCommand),
    /// Solve problems and compare against the recorded answer key
    Verify(VerifyCommand),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::List(cmd) => cmd.run(cli.json),
        Commands::Run(cmd) => cmd.run(cli.data_dir, cli.json),
        Commands::Verify(cmd) => cmd.run(cli.data_dir, cli.json),
    }
}
