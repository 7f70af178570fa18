// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;

/// Raw bytes of a sequence that matched no known pattern. The longest sequence either
/// decoder gives up on is 3 bytes (`ESC [ x`), so this never spills to the heap.
pub type RawBytes = SmallVec<[u8; 4]>;

/// One logical key, decoded from one or more raw bytes. Exactly one of these is
/// produced per decode cycle, and both platform decoders produce the same set, which
/// keeps [`EditorLoop`] platform agnostic.
///
/// [`EditorLoop`]: crate::EditorLoop
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// A character in the printable ASCII range `[0x20, 0x7E]`.
    Printable(char),
    /// Ctrl+C (`0x03`).
    ControlC,
    /// Delete-left. `0x7F` not preceded by `ESC` (Windows also accepts `0x08`).
    Backspace,
    /// Alt+Backspace (`ESC 0x7F`). Distinct from [`KeyEvent::Backspace`].
    MetaBackspace,
    /// Line commit (`0x0D`, and `0x0A` on Unix).
    Enter,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    /// Bytes that matched no known pattern. Kept for diagnostics only.
    Unrecognized(RawBytes),
}
