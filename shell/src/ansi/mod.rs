// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

//! Byte level terminal protocol: the input bytes the decoders recognize, the output
//! sequences the renderer emits, and raw mode.

// Attach sources.
pub mod input_bytes;
pub mod output_sequences;
pub mod raw_mode;

// Re-export.
pub use input_bytes::*;
pub use output_sequences::*;
pub use raw_mode::*;
