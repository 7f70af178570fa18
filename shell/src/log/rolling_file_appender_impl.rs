// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

use crate::ShellError;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Open (or create) the log file at `path_str` for appending. The file is never
/// rotated.
///
/// Note that if you wrap this up in a non blocking writer, the events logged right
/// before the process exits can be lost, since the shell exits on `Ctrl+C`.
///
/// # Errors
///
/// Returns [`ShellError::LogFile`] if:
/// - The path has no file name
/// - Insufficient permissions to access the file or directory
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);
    let log_file_error = || ShellError::LogFile {
        path: path_str.to_string(),
    };

    let file_name = path.file_name().ok_or_else(log_file_error)?;

    // A bare file name has an empty parent, which means the current folder.
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let file_name = file_name.to_str().ok_or_else(log_file_error)?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(parent)
        .map_err(|_| log_file_error().into())
}
