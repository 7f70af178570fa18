// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

use super::{announce, expect_success, read_stdin_termios, report_failure,
            report_success, same_modes};
use crate::{EditorLoop, PlatformFamily, RawInputSource, ReadlineEvent, decoder_for};
use iris_test_fixtures::{generate_pty_test, portable_pty, read_pty_lines_until};
use std::io::Write;

generate_pty_test! {
    /// A real session on a PTY: type, then `Ctrl+C`. The byte `0x03` reaches the
    /// editor (no `SIGINT` in raw mode), and the terminal is restored afterwards.
    test_fn: test_cancelled_session_restores_termios_pty,
    controller: controller_entry_point,
    controlled: controlled_entry_point
}

fn controller_entry_point(
    pty_pair: portable_pty::PtyPair,
    child: Box<dyn portable_pty::Child + Send + Sync>,
) {
    let portable_pty::PtyPair { master, slave } = pty_pair;
    drop(slave);

    let mut reader = master.try_clone_reader().expect("Failed to get reader");

    // Keys typed before raw mode would be line buffered, and `Ctrl+C` would kill the
    // child.
    let ready = read_pty_lines_until(&mut reader, "RAW_MODE_READY");
    assert_eq!(ready.failure, None, "lines: {:?}", ready.lines);
    assert!(
        ready.lines.iter().any(|it| it.contains("RAW_MODE_READY")),
        "lines: {:?}",
        ready.lines
    );

    let mut writer = master.take_writer().expect("Failed to get writer");
    writer.write_all(b"ab\x1b[Dc\x03").expect("Failed to write keys");
    writer.flush().expect("Failed to flush keys");

    expect_success(reader, child);
}

fn controlled_entry_point() -> ! {
    announce("STARTING");
    let before = read_stdin_termios();

    let mut input = match RawInputSource::open() {
        Ok(it) => it,
        Err(report) => report_failure(&format!("open: {report}")),
    };
    announce("RAW_MODE_READY");

    let mut editor = EditorLoop::new("> ", decoder_for(PlatformFamily::Unix));
    let mut stdout = std::io::stdout();
    match editor.readline(&mut input, &mut stdout) {
        Ok(ReadlineEvent::Interrupted) => {}
        other => report_failure(&format!("expected Interrupted, got {other:?}")),
    }
    if editor.line_buffer().text() != "acb" {
        report_failure(&format!("pending text: {:?}", editor.line_buffer().text()));
    }

    drop(input);

    if !same_modes(&before, &read_stdin_termios()) {
        report_failure("terminal modes not restored after Ctrl+C");
    }

    report_success("session cancelled and terminal restored");
}
