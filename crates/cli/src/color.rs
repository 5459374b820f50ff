// SPDX-License-Identifier: MIT
// Copyright (c) 2026 crank contributors

//! Colored status lines for terminal feedback.
//!
//! Success goes to stdout, failure to stderr. Color is auto-detected;
//! write errors to a closed pipe are ignored.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print a green status line to stdout.
pub fn success(msg: &str) {
    let mut out = StandardStream::stdout(ColorChoice::Auto);
    write_colored(&mut out, Color::Green, msg);
}

/// Print a red status line to stderr.
pub fn failure(msg: &str) {
    let mut err = StandardStream::stderr(ColorChoice::Auto);
    write_colored(&mut err, Color::Red, msg);
}

fn write_colored(stream: &mut StandardStream, color: Color, msg: &str) {
    let _ = stream.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    let _ = writeln!(stream, "{msg}");
    let _ = stream.reset();
}
