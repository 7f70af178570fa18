// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

//! `iris_shell` is the interactive line editor behind the Iris shell. It reads raw,
//! unbuffered bytes from the terminal, decodes them into logical keys, keeps an
//! editable line with a cursor, and redraws the whole line after every keystroke.
//!
//! # Pipeline
//!
//! Data flows strictly in one direction, and only [`EditorLoop`] coordinates:
//!
//! ```text
//! RawInputSource ─► KeyDecoder ─► EditorLoop ─► LineBuffer
//!  (raw mode,       (Unix or       (transition     │
//!   1 byte/read)     Windows FSM)    table)        ▼
//!                                               Renderer ─► terminal
//! ```
//!
//! 1. [`RawInputSource`] puts the terminal in raw mode (scoped by a [`RawModeGuard`])
//!    and hands out one byte per read.
//! 2. A [`KeyDecoder`] turns bytes into [`KeyEvent`]s. There is one state machine per
//!    [`PlatformFamily`]; the choice is made once, in [`decoder_for()`].
//! 3. [`EditorLoop`] applies each key to its [`LineBuffer`] and calls the
//!    [`Renderer`] after every transition.
//!
//! # Example
//!
//! Synthetic input works exactly like a terminal, which is how most of the tests in
//! this crate drive the editor:
//!
//! ```
//! use iris_shell::{EditorLoop, PlatformFamily, ReadlineEvent, decoder_for};
//!
//! let mut input: &[u8] = b"ab\x1b[Dc\r";
//! let mut output: Vec<u8> = vec![];
//! let mut editor = EditorLoop::new("> ", decoder_for(PlatformFamily::Unix));
//!
//! let event = editor.readline(&mut input, &mut output).unwrap();
//! assert_eq!(event, ReadlineEvent::Line("acb".into()));
//! ```
//!
//! # Key bindings
//!
//! - Printable ASCII: insert at the cursor.
//! - Backspace, Alt+Backspace: delete the character left of the cursor.
//! - Left, Right: move the cursor.
//! - Up, Down: decoded but reserved (no-op).
//! - Enter: commit the line.
//! - Ctrl+C: cancel.

// Enable strict error handling in production code (not in tests).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod ansi;
pub mod error;
pub mod input;
pub mod log;
pub mod readline;

// Re-export.
pub use ansi::*;
pub use error::*;
pub use input::*;
pub use log::*;
pub use readline::*;

/// Flip to `false` to silence the per-keystroke `debug!` logs.
pub const DEBUG_SHELL_MOD: bool = true;
