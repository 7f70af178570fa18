// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

use super::{report_failure, report_success};
use crate::{RawInputSource, ShellError};
use std::process::{Command, Stdio};

const NO_TERMINAL_ENV_VAR: &str = "IRIS_NO_TERMINAL_TEST_CHILD";

/// With stdin redirected and no controlling terminal, `open()` fails with
/// [`ShellError::TerminalFd`] and leaves nothing to restore. Needs no PTY, so it also
/// runs in CI.
#[test]
fn test_open_without_terminal_fails_with_terminal_fd() {
    if std::env::var(NO_TERMINAL_ENV_VAR).is_ok() {
        child_entry_point();
    }

    let test_binary = std::env::current_exe().expect("Failed to get current executable");
    let output = Command::new(test_binary)
        .env(NO_TERMINAL_ENV_VAR, "1")
        .args([
            "--test-threads",
            "1",
            "--nocapture",
            "test_open_without_terminal_fails_with_terminal_fd",
        ])
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to run child");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("FAILED:"), "{stdout}");
    assert!(stdout.contains("SUCCESS:"), "{stdout}");
    assert!(output.status.success(), "{stdout}");
}

fn child_entry_point() -> ! {
    // Leave the controlling terminal, so `/dev/tty` can't be opened either.
    if let Err(error) = rustix::process::setsid() {
        report_failure(&format!("setsid: {error}"));
    }

    match RawInputSource::open() {
        Ok(_) => report_failure("open() succeeded without a terminal"),
        Err(report) => match report.downcast_ref::<ShellError>() {
            Some(ShellError::TerminalFd(_)) => {
                if crate::disable_raw_mode().is_err() {
                    report_failure("disable_raw_mode() failed with nothing saved");
                }
                report_success("open() failed with TerminalFd");
            }
            other => report_failure(&format!("unexpected error: {other:?} ({report})")),
        },
    }
}
