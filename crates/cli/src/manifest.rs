// SPDX-License-Identifier: MIT
// Copyright (c) 2026 crank contributors

//! pyproject.toml line extraction.
//!
//! The release flow pattern-matches a `version = "X"` line rather than
//! parsing the full manifest, matching the original script. A missing line
//! yields an empty version with no validation; the git steps downstream
//! fail naturally if the result is unusable.

use std::path::Path;
use std::sync::LazyLock;

use anyhow::Context;
use regex::Regex;

/// Manifest file name expected at the project root.
pub const MANIFEST_FILE: &str = "pyproject.toml";

// The patterns are compile-time constants; construction cannot fail.
#[allow(clippy::unwrap_used)]
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)^version\s*=\s*"([^"]*)""#).unwrap());

#[allow(clippy::unwrap_used)]
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)^name\s*=\s*"([^"]*)""#).unwrap());

/// Extract the version from manifest content.
///
/// Returns the exact substring between the quotes of the first
/// `version = "…"` line, or an empty string when no such line exists.
pub fn version(content: &str) -> String {
    VERSION_RE
        .captures(content)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}

/// Extract the package name from manifest content, if declared.
pub fn name(content: &str) -> Option<String> {
    NAME_RE.captures(content).map(|caps| caps[1].to_string())
}

/// Read the manifest at the project root.
pub fn read(root: &Path) -> anyhow::Result<String> {
    let path = root.join(MANIFEST_FILE);
    std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
