// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

pub mod read_pty_lines;

// Re-export.
pub use read_pty_lines::*;
