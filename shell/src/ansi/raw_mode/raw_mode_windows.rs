// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

//! Windows implementation of raw mode using Crossterm.
//!
//! Crossterm handles the Windows Console API (`SetConsoleMode()`), and remembers the
//! original console mode so it can be restored.

use crate::ShellError;

/// Enable raw mode on Windows using Crossterm.
///
/// Delegates to [`crossterm::terminal::enable_raw_mode()`] which disables:
/// - `ENABLE_LINE_INPUT` - line buffering
/// - `ENABLE_ECHO_INPUT` - character echo
/// - `ENABLE_PROCESSED_INPUT` - Ctrl+C handling
///
/// # Errors
///
/// Returns an error if the console mode cannot be changed.
pub fn enable_raw_mode() -> miette::Result<()> {
    crossterm::terminal::enable_raw_mode().map_err(ShellError::RawModeEnable)?;
    Ok(())
}

/// Disable raw mode on Windows using Crossterm.
///
/// # Errors
///
/// Returns an error if the console mode cannot be restored.
pub fn disable_raw_mode() -> miette::Result<()> {
    crossterm::terminal::disable_raw_mode().map_err(ShellError::RawModeDisable)?;
    Ok(())
}
