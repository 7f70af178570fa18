// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

//! Terminal raw mode.
//!
//! ## Raw Mode vs Cooked Mode
//!
//! **Cooked Mode** (default):
//! - Input is line-buffered (waits for Enter key)
//! - Special characters are interpreted (Ctrl+C sends `SIGINT`, Ctrl+D is EOF)
//! - Echoing is enabled (typed characters appear on screen)
//!
//! **Raw Mode**:
//! - No line buffering - bytes available immediately
//! - No special character processing - Ctrl+C arrives as the byte `0x03`
//! - No echo - the [`Renderer`] draws everything itself
//!
//! ## Scoped acquisition
//!
//! Raw mode must be released on every exit path, or the user's terminal is left
//! unusable. Always hold it through a [`RawModeGuard`]; dropping the guard (normal
//! return, `?` propagation, or unwinding from a panic) restores the saved settings.
//!
//! ```no_run
//! use iris_shell::RawModeGuard;
//!
//! {
//!     let _guard = RawModeGuard::new()?;
//!     // Terminal is now in raw mode.
//! } // Original mode restored here.
//! # Ok::<(), miette::Report>(())
//! ```
//!
//! ## Platform Support
//!
//! - **Unix/Linux/macOS**: rustix's safe termios API, on stdin or `/dev/tty`.
//! - **Windows**: crossterm (`SetConsoleMode()`).
//! - **Anything else**: [`ShellError::UnsupportedPlatform`], no fallback.
//!
//! [`Renderer`]: crate::Renderer
//! [`ShellError::UnsupportedPlatform`]: crate::ShellError::UnsupportedPlatform

// Private modules (hide internal structure).
mod raw_mode_core;

#[cfg(unix)]
mod raw_mode_unix;

#[cfg(windows)]
mod raw_mode_windows;

#[cfg(all(test, unix))]
mod integration_tests;

// Re-export the public API (flat, ergonomic surface).
pub use raw_mode_core::*;

#[cfg(unix)]
pub(crate) use raw_mode_unix::{TerminalFd, get_terminal_fd};
