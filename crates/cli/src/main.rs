// SPDX-License-Identifier: MIT
// Copyright (c) 2026 crank contributors

//! crank binary entry point.

mod cmd_release;

use clap::Parser;
use clap::error::ErrorKind;
use crank::cli::{Cli, Command};

fn main() -> std::process::ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version are not failures; anything else (unknown
            // flag, missing subcommand) exits 1.
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0u8,
                _ => 1,
            };
            let _ = err.print();
            return std::process::ExitCode::from(code);
        }
    };

    let result = match &cli.command {
        Command::Test(args) => cmd_test::run(args),
        Command::Release => cmd_release::run(),
    };

    match result {
        Ok(code) => code.into(),
        Err(err) => {
            crank::color::failure(&format!("error: {err:#}"));
            std::process::ExitCode::from(1)
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
