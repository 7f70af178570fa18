// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

//! Raw mode against real terminal devices. Each test re-runs the test binary in a
//! child process (attached to a PTY, or detached from any terminal) and the child
//! reports back with a `SUCCESS:` or `FAILED:` line on stdout.

// Attach sources.
mod test_cancelled_session_restores;
mod test_guard_restores;
mod test_no_terminal;

use rustix::termios::{self, Termios};
use std::io::Write;

/// Print the report line and exit the child process.
fn report_success(message: &str) -> ! {
    println!("SUCCESS: {message}");
    drop(std::io::stdout().flush());
    std::process::exit(0);
}

/// Print the report line and exit the child process.
fn report_failure(message: &str) -> ! {
    println!("FAILED: {message}");
    drop(std::io::stdout().flush());
    std::process::exit(1);
}

fn announce(marker: &str) {
    println!("{marker}");
    drop(std::io::stdout().flush());
}

/// Current settings of the terminal on stdin.
fn read_stdin_termios() -> Termios {
    match termios::tcgetattr(std::io::stdin()) {
        Ok(it) => it,
        Err(error) => report_failure(&format!("tcgetattr: {error}")),
    }
}

fn same_modes(lhs: &Termios, rhs: &Termios) -> bool {
    lhs.input_modes == rhs.input_modes
        && lhs.output_modes == rhs.output_modes
        && lhs.control_modes == rhs.control_modes
        && lhs.local_modes == rhs.local_modes
}

/// Shared controller side: fail on a `FAILED:` report, require a `SUCCESS:` one, and
/// reap the child.
fn expect_success(
    reader: impl std::io::Read,
    mut child: Box<dyn iris_test_fixtures::portable_pty::Child + Send + Sync>,
) {
    let report = iris_test_fixtures::read_pty_lines_until(reader, "SUCCESS:");
    assert_eq!(report.failure, None, "lines: {:?}", report.lines);
    assert!(report.success.is_some(), "lines: {:?}", report.lines);
    let status = child.wait().expect("Failed to wait for child");
    assert!(status.success(), "child exited with {status:?}");
}
