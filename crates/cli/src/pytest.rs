// SPDX-License-Identifier: MIT
// Copyright (c) 2026 crank contributors

//! Construction of the delegated `uv run pytest` invocation.
//!
//! Each flag independently contributes one piece of the argument vector.
//! `--html` is forwarded even when coverage is disabled; the combination is
//! passed through to pytest unchecked, matching the original wrapper.

use crate::cli::TestArgs;

/// Resolved options for one test run.
#[derive(Debug, Clone)]
pub struct TestOptions {
    pub verbose: bool,
    pub coverage: bool,
    pub html: bool,
    pub fail_fast: bool,
    pub parallel: bool,
    pub target: Option<String>,
}

impl From<&TestArgs> for TestOptions {
    fn from(args: &TestArgs) -> Self {
        Self {
            verbose: args.verbose,
            coverage: !args.no_coverage,
            html: args.html,
            fail_fast: args.fail_fast,
            parallel: args.parallel,
            target: args.test.clone(),
        }
    }
}

/// Relative path of the HTML coverage report pytest-cov writes.
pub const HTML_REPORT: &str = "htmlcov/index.html";

/// Build the argument vector passed to `uv`.
///
/// `package` is the coverage target (`--cov=<package>`). The selector, when
/// present, goes last so pytest sees it after all option flags.
pub fn uv_args(opts: &TestOptions, package: &str) -> Vec<String> {
    let mut args = vec!["run".to_string(), "pytest".to_string()];

    if opts.verbose {
        args.push("-v".to_string());
    }
    if opts.coverage {
        args.push(format!("--cov={package}"));
        args.push("--cov-report=term-missing".to_string());
    }
    if opts.html {
        args.push("--cov-report=html".to_string());
    }
    if opts.fail_fast {
        args.push("-x".to_string());
    }
    if opts.parallel {
        args.push("-n".to_string());
        args.push("auto".to_string());
    }
    if let Some(target) = &opts.target {
        args.push(target.clone());
    }

    args
}

#[cfg(test)]
#[path = "pytest_tests.rs"]
mod tests;
