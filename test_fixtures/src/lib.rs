// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

//! Reusable fixtures for testing the `iris_shell` line editor "end to end", without a
//! real terminal attached. This crate is meant to be a
//! [`dev-dependency`](https://doc.rust-lang.org/cargo/reference/specifying-dependencies.html#dev-dependencies).
//!
//! 1. The input fixtures ([`InputBytesMock`]) stand in for the raw byte stream that a
//!    terminal in raw mode produces.
//! 2. The output fixtures ([`StdoutMock`]) capture what the renderer writes to the
//!    terminal, so tests can assert on the exact escape sequences (or on the plain
//!    text with the escape sequences stripped).
//! 3. [`TempDir`] is a self deleting temporary directory (used for log file tests).
//! 4. [`generate_pty_test!`] runs part of a test in a child process attached to a
//!    real PTY, for the raw mode tests; [`read_pty_lines_until()`] collects what the
//!    child reports.
//!
//! # stdout fixtures
//!
//! ```
//! use std::io::Write;
//! use iris_test_fixtures::StdoutMock;
//!
//! let mut stdout_mock = StdoutMock::default();
//! let stdout_mock_clone = stdout_mock.clone(); // Points to the same inner buffer.
//!
//! stdout_mock.write_all(b"\x1b[2Khello").unwrap();
//! stdout_mock.flush().unwrap();
//!
//! assert_eq!(stdout_mock_clone.get_copy_of_buffer_as_string_strip_ansi(), "hello");
//! ```
//!
//! # input fixtures
//!
//! ```
//! use std::io::Read;
//! use iris_test_fixtures::InputBytesMock;
//!
//! let mut input = InputBytesMock::new(b"ab\x1b[D");
//! let mut byte = [0_u8; 1];
//! input.read_exact(&mut byte).unwrap();
//! assert_eq!(byte[0], b'a');
//! assert_eq!(input.remaining(), 4);
//! ```

// Attach sources.
pub mod input_device_fixtures;
pub mod output_device_fixtures;
pub mod pty_test_fixtures;
pub mod temp_dir;

// Re-export.
pub use input_device_fixtures::*;
pub use output_device_fixtures::*;
pub use pty_test_fixtures::*;
pub use temp_dir::*;

// Used by `generate_pty_test!` expansions in other crates.
pub use is_ci;
pub use portable_pty;
