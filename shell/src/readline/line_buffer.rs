// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

/// The line being edited, and the cursor position within it.
///
/// `index` counts characters (not bytes) and always satisfies
/// `min_index <= index <= len()`. Every operation clamps instead of failing, so a
/// stray keystroke (e.g. Backspace at the start of the line) is a silent no-op.
///
/// The prompt is drawn before the buffer but is not part of it, so `min_index` is 0.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineBuffer {
    text: String,
    index: usize,
    min_index: usize,
}

impl LineBuffer {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    /// Cursor position, in characters.
    #[must_use]
    pub fn index(&self) -> usize { self.index }

    #[must_use]
    pub fn min_index(&self) -> usize { self.min_index }

    /// Length in characters.
    #[must_use]
    pub fn len(&self) -> usize { self.text.chars().count() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.text.is_empty() }

    /// Byte offset of the character at `char_index` (or the end of the text).
    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(offset, _)| offset)
    }

    /// Insert `ch` at the cursor, and move the cursor past it.
    pub fn insert(&mut self, ch: char) {
        let offset = self.byte_offset(self.index);
        self.text.insert(offset, ch);
        self.index += 1;
    }

    /// Remove the character before the cursor. No-op at `min_index`.
    pub fn delete_left(&mut self) {
        if self.index <= self.min_index {
            return;
        }
        let offset = self.byte_offset(self.index - 1);
        self.text.remove(offset);
        self.index -= 1;
    }

    pub fn move_left(&mut self) {
        if self.index > self.min_index {
            self.index -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.index < self.len() {
            self.index += 1;
        }
    }

    /// Take the finished line, leaving the buffer empty with the cursor at
    /// `min_index`.
    pub fn commit_and_reset(&mut self) -> String {
        self.index = self.min_index;
        std::mem::take(&mut self.text)
    }
}
