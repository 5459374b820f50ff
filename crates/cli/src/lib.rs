// SPDX-License-Identifier: MIT
// Copyright (c) 2026 crank contributors

//! Developer chores for uv-managed Python projects.
//!
//! Two independent commands share this crate: `crank test` wraps a
//! `uv run pytest` invocation, and `crank release` commits, tags, builds,
//! and publishes a release. Neither holds state beyond a single invocation.

pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod exec;
pub mod git;
pub mod manifest;
pub mod pytest;
pub mod secret;
