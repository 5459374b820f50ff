// SPDX-License-Identifier: MIT
// Copyright (c) 2026 crank contributors

//! Subprocess helpers for delegated tools.
//!
//! Everything crank does ends in an external command: uv, git, keyring.
//! These helpers spawn with inherited stdio so delegated output reaches the
//! terminal unchanged, and log every command line at debug level.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;

/// Check whether `tool` resolves to a file on the `PATH`.
pub fn tool_on_path(tool: &str) -> bool {
    let Some(path) = std::env::var_os("PATH") else {
        return false;
    };
    tool_in(std::env::split_paths(&path), tool)
}

/// PATH-lookup core, separated so tests can supply their own directories.
fn tool_in(dirs: impl Iterator<Item = PathBuf>, tool: &str) -> bool {
    dirs.map(|dir| dir.join(tool)).any(|p| p.is_file())
}

/// Run a command to completion with inherited stdio.
///
/// Returns `true` when the command exited with status zero. Spawn failures
/// (binary missing, permission denied) are errors; a non-zero exit is not.
pub fn run<S: AsRef<OsStr>>(program: &str, args: &[S], cwd: &Path) -> anyhow::Result<bool> {
    tracing::debug!("running: {} {}", program, render_args(args));
    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .status()
        .with_context(|| format!("failed to run {program}"))?;
    Ok(status.success())
}

/// Run a command that must succeed; a non-zero exit is an error.
pub fn run_step<S: AsRef<OsStr>>(program: &str, args: &[S], cwd: &Path) -> anyhow::Result<()> {
    if run(program, args, cwd)? {
        Ok(())
    } else {
        anyhow::bail!("{} {} failed", program, render_args(args))
    }
}

/// Like [`run_step`], but the debug log and the error message show
/// `shown` instead of the real arguments. Used for command lines that
/// carry a credential.
pub fn run_step_redacted<S: AsRef<OsStr>>(
    program: &str,
    args: &[S],
    shown: &str,
    cwd: &Path,
) -> anyhow::Result<()> {
    tracing::debug!("running: {} {}", program, shown);
    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .status()
        .with_context(|| format!("failed to run {program}"))?;
    if status.success() {
        Ok(())
    } else {
        anyhow::bail!("{} {} failed", program, shown)
    }
}

fn render_args<S: AsRef<OsStr>>(args: &[S]) -> String {
    args.iter()
        .map(|a| a.as_ref().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
