// SPDX-License-Identifier: MIT
// Copyright (c) 2026 crank contributors

//! `crank release` command implementation.
//!
//! Strictly sequential: commit, tag, push, build, publish. The first failing
//! step aborts the rest. There is no rollback; a release interrupted after
//! the commit or tag leaves those in place without the push or publish.

use anyhow::Context;

use crank::error::ExitCode;
use crank::{color, config, exec, git, manifest, secret};

/// Run the `crank release` command.
pub fn run() -> anyhow::Result<ExitCode> {
    let root = std::env::current_dir().context("failed to resolve current directory")?;

    if !git::is_git_repo(&root) {
        color::failure("crank release must run inside a git repository");
        return Ok(ExitCode::Failure);
    }

    let config = config::load_or_default(&root)?;
    let content = manifest::read(&root)?;

    // The extracted string is used verbatim in the commit message, the tag
    // name, and the tag message. It is not validated; an absent version
    // line yields an empty string and the git steps fail on their own.
    let version = manifest::version(&content);
    tracing::debug!("releasing version {version:?}");

    let message = format!("Release {version}");
    let tag = format!("v{version}");

    git::commit_all(&root, &message)?;
    git::tag_annotated(&root, &tag, &message)?;
    git::push(&root, &config.release.remote, &tag)?;

    exec::run_step("uv", &["build"], &root)?;

    let token = secret::publish_token(&config.release.service, &config.release.account)?;
    exec::run_step_redacted(
        "uv",
        &["publish", "--token", token.as_str()],
        "publish --token <redacted>",
        &root,
    )?;

    color::success(&format!("Published version {version}"));
    Ok(ExitCode::Success)
}
