// SPDX-License-Identifier: MIT
// Copyright (c) 2026 crank contributors

//! Optional `crank.toml` configuration.
//!
//! Discovered by walking up from the starting directory to the git root.
//! Every field has a default matching the original project setup, so a
//! missing file is not an error; a malformed one is.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub test: TestConfig,
    pub release: ReleaseConfig,
}

/// Settings for `crank test`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct TestConfig {
    /// Coverage target package. Defaults to the pyproject `name` entry.
    pub package: Option<String>,
}

/// Settings for `crank release`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    /// Git remote the release tag is pushed to.
    #[serde(default = "ReleaseConfig::default_remote")]
    pub remote: String,

    /// Secret-store service name holding the publish token.
    #[serde(default = "ReleaseConfig::default_service")]
    pub service: String,

    /// Secret-store account the token is filed under.
    #[serde(default = "ReleaseConfig::default_account")]
    pub account: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            remote: Self::default_remote(),
            service: Self::default_service(),
            account: Self::default_account(),
        }
    }
}

impl ReleaseConfig {
    fn default_remote() -> String {
        "origin".to_string()
    }

    fn default_service() -> String {
        "pypi".to_string()
    }

    fn default_account() -> String {
        "00sapo".to_string()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Load configuration from a crank.toml file.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Find crank.toml starting from `start_dir` and walking up to the git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join("crank.toml");
        if config_path.exists() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Load the configuration for `root`, falling back to defaults.
pub fn load_or_default(root: &Path) -> Result<Config, ConfigError> {
    match find_config(root) {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            load(&path)
        }
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
