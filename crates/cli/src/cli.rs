// SPDX-License-Identifier: MIT
// Copyright (c) 2026 crank contributors

//! CLI argument parsing with clap derive.

use clap::{Parser, Subcommand};

/// Developer chores for uv-managed Python projects
#[derive(Parser)]
#[command(name = "crank")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the test suite through uv/pytest
    Test(TestArgs),
    /// Commit, tag, build, and publish a release
    Release,
}

#[derive(clap::Args)]
pub struct TestArgs {
    /// Enable verbose pytest output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable coverage collection
    #[arg(long)]
    pub no_coverage: bool,

    /// Additionally emit an HTML coverage report
    #[arg(long)]
    pub html: bool,

    /// Run only the given test file or node id
    #[arg(short, long, value_name = "FILE")]
    pub test: Option<String>,

    /// Stop at the first failing test
    #[arg(short = 'x', long)]
    pub fail_fast: bool,

    /// Distribute tests across available workers
    #[arg(short = 'j', long)]
    pub parallel: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
