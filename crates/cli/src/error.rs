// SPDX-License-Identifier: MIT
// Copyright (c) 2026 crank contributors

//! Process exit codes.
//!
//! Every failure path maps to code 1: missing required tool, unknown
//! argument, a failed release step, or a failing delegated test run.

/// Exit status of a crank command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully.
    Success,
    /// Command failed; details were already printed.
    Failure,
}

impl ExitCode {
    pub fn code(self) -> u8 {
        match self {
            ExitCode::Success => 0,
            ExitCode::Failure => 1,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.code())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
