// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

//! Output sequences written by the [`Renderer`].
//!
//! Only three VT100 capabilities are used, and no capability negotiation is done:
//!
//! | Sequence      | Name                         | Effect                            |
//! |---------------|------------------------------|-----------------------------------|
//! | `CR`          | Carriage return              | Move to column 0                  |
//! | `CSI 2 K`     | EL 2, Erase in Line (all)    | Clear the whole line              |
//! | `CSI n D`     | CUB, Cursor Backward         | Move the cursor `n` columns left  |
//!
//! [`Renderer`]: crate::Renderer

use std::fmt::{self, Display};

/// CSI start: `ESC [`
pub const CSI_START: &str = "\x1b[";

/// Carriage return.
pub const CR: &str = "\r";

/// Raw mode disables `OPOST`, so a newline must carry its own carriage return.
pub const CRLF: &str = "\r\n";

/// EL (Erase in Line) final byte.
pub const EL_ERASE_LINE: char = 'K';

/// EL parameter: erase the entire line.
pub const EL_ERASE_ALL: u16 = 2;

/// CUB (Cursor Backward) final byte.
pub const CUB_CURSOR_BACKWARD: char = 'D';

/// The CSI sequences emitted by the renderer. Use [`Display`] to get the bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsiSequence {
    /// `CSI 2 K`
    EraseEntireLine,
    /// `CSI n D`
    CursorBackward(usize),
}

impl Display for CsiSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsiSequence::EraseEntireLine => {
                write!(f, "{CSI_START}{EL_ERASE_ALL}{EL_ERASE_LINE}")
            }
            CsiSequence::CursorBackward(n) => {
                write!(f, "{CSI_START}{n}{CUB_CURSOR_BACKWARD}")
            }
        }
    }
}
