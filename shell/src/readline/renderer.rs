// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

use crate::{CR, CsiSequence};
use std::io::{self, Write};

/// Draws the prompt and the line, then puts the terminal cursor where the
/// [`LineBuffer`] cursor is.
///
/// Every frame is a full clear-and-rewrite; nothing is remembered between frames:
///
/// 1. `CR` + `CSI 2 K`: back to column 0 and erase the line.
/// 2. `prompt + text`.
/// 3. `CSI n D` with `n = len(text) - index`, only when the cursor isn't at the end.
///
/// [`LineBuffer`]: crate::LineBuffer
#[derive(Debug, Default, Clone, Copy)]
pub struct Renderer;

impl Renderer {
    /// The exact bytes of one frame. `index` is in characters, and is clamped to the
    /// length of `text`.
    #[must_use]
    pub fn frame(prompt: &str, text: &str, index: usize) -> String {
        let mut frame = format!("{CR}{}{prompt}{text}", CsiSequence::EraseEntireLine);
        let columns_after_cursor = text.chars().count().saturating_sub(index);
        if columns_after_cursor > 0 {
            frame.push_str(&CsiSequence::CursorBackward(columns_after_cursor).to_string());
        }
        frame
    }

    /// Write one frame to `term` and flush it.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to or flushing the terminal fails.
    pub fn render(
        term: &mut dyn Write,
        prompt: &str,
        text: &str,
        index: usize,
    ) -> io::Result<()> {
        term.write_all(Self::frame(prompt, text, index).as_bytes())?;
        term.flush()
    }
}
