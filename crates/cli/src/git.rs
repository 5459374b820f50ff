// SPDX-License-Identifier: MIT
// Copyright (c) 2026 crank contributors

//! Git operations for the release flow.
//!
//! Uses git2 (libgit2) for repository discovery. Mutations go through the
//! git CLI so commit hooks, signing configuration, and credential helpers
//! apply exactly as they would for a manual release.

use std::path::Path;

use git2::Repository;

use crate::exec;

/// Check if a path is in a git repository.
pub fn is_git_repo(root: &Path) -> bool {
    Repository::discover(root).is_ok()
}

/// Commit all tracked changes with the given message.
pub fn commit_all(root: &Path, message: &str) -> anyhow::Result<()> {
    exec::run_step("git", &["commit", "-a", "-m", message], root)
}

/// Create an annotated tag.
pub fn tag_annotated(root: &Path, tag: &str, message: &str) -> anyhow::Result<()> {
    exec::run_step("git", &["tag", "-a", tag, "-m", message], root)
}

/// Push a single ref to a remote.
pub fn push(root: &Path, remote: &str, refname: &str) -> anyhow::Result<()> {
    exec::run_step("git", &["push", remote, refname], root)
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
