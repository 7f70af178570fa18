// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

//! Raw bytes in, [`KeyEvent`]s out.

// Attach sources.
pub mod key_decoder;
pub mod key_event;
pub mod platform_family;
pub mod raw_input_source;
pub mod unix_key_decoder;
pub mod windows_key_decoder;

// Re-export.
pub use key_decoder::*;
pub use key_event::*;
pub use platform_family::*;
pub use raw_input_source::*;
pub use unix_key_decoder::*;
pub use windows_key_decoder::*;
