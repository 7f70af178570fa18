// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

use super::{announce, expect_success, read_stdin_termios, report_failure,
            report_success, same_modes};
use crate::RawModeGuard;
use iris_test_fixtures::{generate_pty_test, portable_pty};

generate_pty_test! {
    /// Raw mode changes the PTY settings, and dropping the guard puts them back.
    test_fn: test_raw_mode_guard_restores_termios_pty,
    controller: controller_entry_point,
    controlled: controlled_entry_point
}

fn controller_entry_point(
    pty_pair: portable_pty::PtyPair,
    child: Box<dyn portable_pty::Child + Send + Sync>,
) {
    let portable_pty::PtyPair { master, slave } = pty_pair;
    // Only the child keeps the terminal side open, so its exit ends the stream.
    drop(slave);

    let reader = master.try_clone_reader().expect("Failed to get reader");
    expect_success(reader, child);
}

fn controlled_entry_point() -> ! {
    announce("STARTING");
    let before = read_stdin_termios();

    let guard = match RawModeGuard::new() {
        Ok(it) => it,
        Err(report) => report_failure(&format!("enable raw mode: {report}")),
    };

    let during = read_stdin_termios();
    if during.local_modes == before.local_modes {
        report_failure("local modes unchanged in raw mode");
    }

    drop(guard);

    let after = read_stdin_termios();
    if !same_modes(&before, &after) {
        report_failure("terminal modes not restored after the guard dropped");
    }

    // A second cycle starts from the restored settings.
    let guard = match RawModeGuard::new() {
        Ok(it) => it,
        Err(report) => report_failure(&format!("enable raw mode again: {report}")),
    };
    drop(guard);
    if !same_modes(&before, &read_stdin_termios()) {
        report_failure("terminal modes not restored after the second cycle");
    }

    report_success("raw mode enabled, then restored twice");
}
