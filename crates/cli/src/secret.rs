// SPDX-License-Identifier: MIT
// Copyright (c) 2026 crank contributors

//! Publish-token lookup from the local secret store.
//!
//! Queries the `keyring` CLI by service and account at release time, so the
//! token never lives in the repository or the environment. The token is
//! whatever the store returns, trailing newline stripped; no format
//! validation is applied.

use std::process::Command;

use anyhow::Context;

/// Fetch the publish token for `service`/`account` from the keyring.
pub fn publish_token(service: &str, account: &str) -> anyhow::Result<String> {
    let mut cmd = Command::new("keyring");
    cmd.args(["get", service, account]);
    fetch(cmd, service, account)
}

/// Run a prepared lookup command and extract the token from its stdout.
fn fetch(mut cmd: Command, service: &str, account: &str) -> anyhow::Result<String> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to query the secret store for {service}/{account}"))?;

    if !output.status.success() {
        anyhow::bail!("secret store returned no token for {service}/{account}");
    }

    let token = String::from_utf8(output.stdout)
        .context("secret store returned a non-UTF-8 token")?
        .trim_end_matches(['\r', '\n'])
        .to_string();
    Ok(token)
}

#[cfg(test)]
#[path = "secret_tests.rs"]
mod tests;
