// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

//! Diagnostic error types. See [`ShellError`].

use miette::Diagnostic;
use std::io;

/// Everything that can go wrong in the shell, outside of a single keystroke.
///
/// Keys that don't decode, and cursor moves past either end of the line, are never
/// errors: they become [`KeyEvent::Unrecognized`] or clamp silently.
///
/// [`KeyEvent::Unrecognized`]: crate::KeyEvent::Unrecognized
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ShellError {
    #[error("Raw mode input is not supported on this platform ({os})")]
    #[diagnostic(
        code(iris_shell::platform::unsupported),
        help("Only Unix-like systems (Linux, macOS, BSD) and the Windows console are supported")
    )]
    UnsupportedPlatform { os: &'static str },

    #[error("Failed to get a terminal file descriptor")]
    #[diagnostic(
        code(iris_shell::terminal::fd),
        help("stdin is not a tty and /dev/tty could not be opened. Run the shell in a terminal")
    )]
    TerminalFd(#[source] io::Error),

    #[error("Failed to enable raw mode")]
    #[diagnostic(code(iris_shell::raw_mode::enable))]
    RawModeEnable(#[source] io::Error),

    #[error("Failed to restore the terminal to its original mode")]
    #[diagnostic(
        code(iris_shell::raw_mode::disable),
        help("Run `stty sane` (or `reset`) to restore your terminal")
    )]
    RawModeDisable(#[source] io::Error),

    #[error("Terminal I/O failed")]
    #[diagnostic(code(iris_shell::terminal::io))]
    TerminalIo(#[from] io::Error),

    #[error("Can't use log file {path}")]
    #[diagnostic(
        code(iris_shell::log::file),
        help("The path must name a file in an existing, writable folder")
    )]
    LogFile { path: String },
}
