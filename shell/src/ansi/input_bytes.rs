// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

//! Input byte constants for both key tables.
//!
//! # Unix-like terminals (VT100 / ANSI)
//!
//! Arrow keys arrive as CSI sequences, `ESC [ final_byte`:
//! - Up: `ESC[A`
//! - Down: `ESC[B`
//! - Right: `ESC[C`
//! - Left: `ESC[D`
//!
//! Alt+Backspace arrives as `ESC DEL` (the terminal prefixes the key with `ESC` when
//! Alt/Meta is held).
//!
//! # Windows console (`_getch()`)
//!
//! Non-character keys arrive as two reads: an extended-key prefix (`0x00` or `0xE0`)
//! followed by a scan code:
//! - Up: `H`
//! - Down: `P`
//! - Right: `M`
//! - Left: `K`

// ==================== Control Bytes ====================

/// ESC byte (27 in decimal, 0x1B in hex)
pub const ANSI_ESC: u8 = 0x1B;

/// CSI bracket byte: `[` (91 in decimal, 0x5B in hex)
pub const ANSI_CSI_BRACKET: u8 = 0x5B;

/// ETX (Ctrl+C). Raw mode disables `ISIG`, so this arrives as a byte, not a signal.
pub const ASCII_ETX: u8 = 0x03;

/// BS (Ctrl+H). Some Windows consoles send this for Backspace.
pub const ASCII_BS: u8 = 0x08;

/// LF (Ctrl+J)
pub const ASCII_LF: u8 = 0x0A;

/// CR (Ctrl+M). Raw mode disables `ICRNL`, so Enter sends this rather than LF.
pub const ASCII_CR: u8 = 0x0D;

/// DEL. Historical quirk: the Backspace key sends DEL (7F), not BS (08).
pub const ASCII_DEL: u8 = 0x7F;

/// First printable ASCII byte (space).
pub const ASCII_PRINTABLE_FIRST: u8 = 0x20;

/// Last printable ASCII byte (`~`).
pub const ASCII_PRINTABLE_LAST: u8 = 0x7E;

// ==================== Arrow Keys (CSI A/B/C/D) ====================

/// CSI A: Up arrow key final byte
pub const ARROW_UP_FINAL: u8 = b'A';

/// CSI B: Down arrow key final byte
pub const ARROW_DOWN_FINAL: u8 = b'B';

/// CSI C: Right arrow key final byte
pub const ARROW_RIGHT_FINAL: u8 = b'C';

/// CSI D: Left arrow key final byte
pub const ARROW_LEFT_FINAL: u8 = b'D';

// ==================== Windows Extended Keys ====================

/// Extended-key prefix reported for keys on the numeric keypad (and F1-F10).
pub const WIN_EXTENDED_PREFIX_NUL: u8 = 0x00;

/// Extended-key prefix reported for the dedicated arrow / navigation cluster.
pub const WIN_EXTENDED_PREFIX_E0: u8 = 0xE0;

/// Scan code for the Up arrow.
pub const WIN_SCAN_ARROW_UP: u8 = b'H';

/// Scan code for the Down arrow.
pub const WIN_SCAN_ARROW_DOWN: u8 = b'P';

/// Scan code for the Right arrow.
pub const WIN_SCAN_ARROW_RIGHT: u8 = b'M';

/// Scan code for the Left arrow.
pub const WIN_SCAN_ARROW_LEFT: u8 = b'K';

/// Is `byte` in the printable ASCII range `[0x20, 0x7E]`?
#[must_use]
pub const fn is_printable_ascii(byte: u8) -> bool {
    byte >= ASCII_PRINTABLE_FIRST && byte <= ASCII_PRINTABLE_LAST
}
