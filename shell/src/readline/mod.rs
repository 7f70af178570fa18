// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

//! Line editing: the buffer, the renderer, and the loop that drives them.

// Attach sources.
pub mod editor_loop;
pub mod key_inspector;
pub mod line_buffer;
pub mod renderer;

// Re-export.
pub use editor_loop::*;
pub use key_inspector::*;
pub use line_buffer::*;
pub use renderer::*;
