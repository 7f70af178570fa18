// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

//! Unix/Linux/macOS implementation of raw mode using rustix's safe termios API.

use crate::ShellError;
use miette::miette;
use rustix::{fd::{AsFd, BorrowedFd},
             termios::{self, OptionalActions, Termios}};
use std::{fs::File,
          io::{self, Read},
          sync::{LazyLock, Mutex}};

/// Stores the original terminal settings to restore later.
static ORIGINAL_TERMIOS: LazyLock<Mutex<Option<Termios>>> =
    LazyLock::new(|| Mutex::new(None));

/// Represents either stdin or `/dev/tty` for terminal operations.
///
/// Raw mode is configured on, and bytes are read from, the same device. When stdin is
/// redirected (e.g. `echo data | iris-shell`), the controlling terminal is still
/// reachable through `/dev/tty`.
#[derive(Debug)]
pub(crate) enum TerminalFd {
    /// Using standard input (when it's a terminal)
    Stdin(io::Stdin),
    /// Using `/dev/tty` (when stdin is redirected)
    DevTty(File),
}

impl AsFd for TerminalFd {
    fn as_fd(&self) -> BorrowedFd<'_> {
        match self {
            TerminalFd::Stdin(stdin) => stdin.as_fd(),
            TerminalFd::DevTty(file) => file.as_fd(),
        }
    }
}

impl Read for TerminalFd {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            TerminalFd::Stdin(stdin) => stdin.lock().read(buf),
            TerminalFd::DevTty(file) => file.read(buf),
        }
    }
}

/// Gets a file descriptor for the controlling terminal: stdin if it is a tty,
/// otherwise `/dev/tty`.
///
/// # Errors
///
/// Returns an error if stdin is not a tty and `/dev/tty` cannot be opened.
pub(crate) fn get_terminal_fd() -> miette::Result<TerminalFd> {
    let stdin = io::stdin();
    if termios::isatty(&stdin) {
        Ok(TerminalFd::Stdin(stdin))
    } else {
        let file = File::options()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .map_err(ShellError::TerminalFd)?;
        Ok(TerminalFd::DevTty(file))
    }
}

/// Enable raw mode on the terminal (Unix/Linux/macOS implementation).
///
/// 1. Get the controlling terminal (stdin if it's a tty, otherwise `/dev/tty`)
/// 2. Save the original terminal settings for restoration
/// 3. Apply `cfmakeraw()` settings: no canonical mode, no echo, no signal
///    generation, `VMIN=1`, `VTIME=0` (each read blocks until one byte is available)
///
/// # Errors
///
/// Returns miette diagnostic errors if:
/// - Terminal file descriptor cannot be obtained
/// - Terminal attributes cannot be retrieved or set
/// - Mutex lock is poisoned
pub fn enable_raw_mode() -> miette::Result<()> {
    let fd = get_terminal_fd()?;

    let mut termios =
        termios::tcgetattr(&fd).map_err(|e| ShellError::RawModeEnable(e.into()))?;

    // Save original settings.
    {
        let mut original = ORIGINAL_TERMIOS
            .lock()
            .map_err(|e| miette!("terminal settings lock poisoned: {e}"))?;

        if original.is_none() {
            // rustix's Termios doesn't implement Copy, so we need to clone.
            *original = Some(termios.clone());
        }
    }

    termios.make_raw();

    termios::tcsetattr(&fd, OptionalActions::Now, &termios)
        .map_err(|e| ShellError::RawModeEnable(e.into()))?;

    Ok(())
}

/// Disable raw mode and restore the settings saved by [`enable_raw_mode()`]. No-op if
/// raw mode was never enabled.
///
/// Pending input is discarded (`TCSAFLUSH`), so stray bytes typed after the session
/// ended don't leak into the parent shell.
///
/// # Errors
///
/// Returns miette diagnostic errors if:
/// - Terminal file descriptor cannot be obtained
/// - Terminal attributes cannot be set
/// - Mutex lock is poisoned
pub fn disable_raw_mode() -> miette::Result<()> {
    let mut original = ORIGINAL_TERMIOS
        .lock()
        .map_err(|e| miette!("terminal settings lock poisoned: {e}"))?;

    if let Some(termios) = original.take() {
        let fd = get_terminal_fd()?;
        termios::tcsetattr(&fd, OptionalActions::Flush, &termios)
            .map_err(|e| ShellError::RawModeDisable(e.into()))?;
    }
    Ok(())
}
