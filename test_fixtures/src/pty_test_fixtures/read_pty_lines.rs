// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

use std::io::{BufRead, BufReader, Read};

/// What the controlled process reported over the PTY.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PtyReport {
    /// Every line read, trimmed.
    pub lines: Vec<String>,
    /// The first line containing `SUCCESS:`, if any.
    pub success: Option<String>,
    /// The first line containing `FAILED:`, if any.
    pub failure: Option<String>,
}

/// Read lines from the controller side of a PTY until a line contains `until`, a
/// `FAILED:` report shows up, or the stream ends.
///
/// A read error also ends the stream: on Linux, reading the controller side after the
/// child closed its end fails with `EIO` instead of returning `Ok(0)`.
pub fn read_pty_lines_until(reader: impl Read, until: &str) -> PtyReport {
    let mut report = PtyReport::default();
    let mut buf_reader = BufReader::new(reader);

    loop {
        let mut line = String::new();
        match buf_reader.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {
                let trimmed = line.trim().to_string();
                eprintln!("  <- {trimmed}");
                let done = trimmed.contains(until);
                if trimmed.contains("SUCCESS:") && report.success.is_none() {
                    report.success = Some(trimmed.clone());
                }
                let failed = trimmed.contains("FAILED:");
                if failed {
                    report.failure = Some(trimmed.clone());
                }
                report.lines.push(trimmed);
                if done || failed {
                    break;
                }
            }
        }
    }

    report
}
