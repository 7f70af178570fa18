// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

//! Platform-agnostic entry points that dispatch to the platform implementation, and
//! the [`RawModeGuard`] RAII wrapper.

#[cfg(unix)]
use super::raw_mode_unix;
#[cfg(windows)]
use super::raw_mode_windows;

/// Enable raw mode on the terminal.
///
/// Prefer [`RawModeGuard`], which can't forget to call [`disable_raw_mode()`].
///
/// # Errors
///
/// Returns miette diagnostic errors if:
/// - No terminal is available ([`ShellError::TerminalFd`])
/// - Terminal attributes cannot be retrieved or set ([`ShellError::RawModeEnable`])
/// - Platform is not supported ([`ShellError::UnsupportedPlatform`])
///
/// [`ShellError::TerminalFd`]: crate::ShellError::TerminalFd
/// [`ShellError::RawModeEnable`]: crate::ShellError::RawModeEnable
/// [`ShellError::UnsupportedPlatform`]: crate::ShellError::UnsupportedPlatform
pub fn enable_raw_mode() -> miette::Result<()> {
    #[cfg(unix)]
    {
        raw_mode_unix::enable_raw_mode()
    }

    #[cfg(windows)]
    {
        raw_mode_windows::enable_raw_mode()
    }

    #[cfg(not(any(unix, windows)))]
    {
        Err(crate::ShellError::UnsupportedPlatform {
            os: std::env::consts::OS,
        }
        .into())
    }
}

/// Disable raw mode and restore the original terminal settings.
///
/// Safe to call even if raw mode was never enabled (it will be a no-op).
///
/// # Errors
///
/// Returns miette diagnostic errors if the terminal attributes cannot be restored
/// ([`ShellError::RawModeDisable`]) or the platform is not supported.
///
/// [`ShellError::RawModeDisable`]: crate::ShellError::RawModeDisable
pub fn disable_raw_mode() -> miette::Result<()> {
    #[cfg(unix)]
    {
        raw_mode_unix::disable_raw_mode()
    }

    #[cfg(windows)]
    {
        raw_mode_windows::disable_raw_mode()
    }

    #[cfg(not(any(unix, windows)))]
    {
        Err(crate::ShellError::UnsupportedPlatform {
            os: std::env::consts::OS,
        }
        .into())
    }
}

/// RAII guard that disables raw mode when dropped.
///
/// This is the only way [`RawInputSource`] acquires raw mode, so the terminal is
/// restored on every exit path, including a panic that unwinds through the session.
///
/// [`RawInputSource`]: crate::RawInputSource
#[derive(Debug)]
pub struct RawModeGuard;

impl RawModeGuard {
    /// Create a new guard and enable raw mode.
    ///
    /// # Errors
    ///
    /// Returns miette diagnostic errors if raw mode cannot be enabled.
    /// See [`enable_raw_mode()`] for error conditions.
    pub fn new() -> miette::Result<Self> {
        enable_raw_mode()?;
        tracing::debug!(message = "Raw mode enabled");
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        match disable_raw_mode() {
            Ok(()) => tracing::debug!(message = "Raw mode disabled"),
            // Can't propagate from drop.
            Err(report) => tracing::warn!(
                message = "Failed to restore terminal mode",
                error = ?report
            ),
        }
    }
}
