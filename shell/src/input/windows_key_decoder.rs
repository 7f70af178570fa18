// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

//! Key decoder for the Windows console. See [`WindowsKeyDecoder`].

use crate::{ASCII_BS, ASCII_CR, ASCII_DEL, ASCII_ETX, DEBUG_SHELL_MOD, KeyDecoder,
            KeyEvent, PlatformFamily, WIN_EXTENDED_PREFIX_E0, WIN_EXTENDED_PREFIX_NUL,
            WIN_SCAN_ARROW_DOWN, WIN_SCAN_ARROW_LEFT, WIN_SCAN_ARROW_RIGHT,
            WIN_SCAN_ARROW_UP, is_printable_ascii, read_byte};
use smallvec::smallvec;
use std::io::{self, Read};

/// Decoder for the Windows console (`_getch()` byte stream).
///
/// It has a single state: an extended-key prefix (`0x00` or `0xE0`) is resolved with
/// one lookahead read, so nothing is held between calls.
///
/// | Byte             | Emits                                                  |
/// |------------------|--------------------------------------------------------|
/// | `0x00`, `0xE0`   | read `d`: `H` Up, `P` Down, `M` Right, `K` Left, else `Unrecognized([prefix, d])` |
/// | `0x03`           | [`KeyEvent::ControlC`]                                 |
/// | `0x0D`           | [`KeyEvent::Enter`]                                    |
/// | `0x7F`, `0x08`   | [`KeyEvent::Backspace`]                                |
/// | `[0x20, 0x7E]`   | [`KeyEvent::Printable`]                                |
/// | anything else    | `Unrecognized([byte])`                                 |
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsKeyDecoder;

impl WindowsKeyDecoder {
    fn decode_scan_code(prefix: u8, scan_code: u8) -> KeyEvent {
        match scan_code {
            WIN_SCAN_ARROW_UP => KeyEvent::ArrowUp,
            WIN_SCAN_ARROW_DOWN => KeyEvent::ArrowDown,
            WIN_SCAN_ARROW_RIGHT => KeyEvent::ArrowRight,
            WIN_SCAN_ARROW_LEFT => KeyEvent::ArrowLeft,
            other => KeyEvent::Unrecognized(smallvec![prefix, other]),
        }
    }
}

impl KeyDecoder for WindowsKeyDecoder {
    fn platform_family(&self) -> PlatformFamily { PlatformFamily::Windows }

    fn next_key(&mut self, input: &mut dyn Read) -> io::Result<Option<KeyEvent>> {
        let Some(byte) = read_byte(input)? else {
            return Ok(None);
        };

        let key = match byte {
            prefix @ (WIN_EXTENDED_PREFIX_NUL | WIN_EXTENDED_PREFIX_E0) => {
                match read_byte(input)? {
                    Some(scan_code) => Self::decode_scan_code(prefix, scan_code),
                    None => KeyEvent::Unrecognized(smallvec![prefix]),
                }
            }
            ASCII_ETX => KeyEvent::ControlC,
            ASCII_CR => KeyEvent::Enter,
            ASCII_DEL | ASCII_BS => KeyEvent::Backspace,
            it if is_printable_ascii(it) => KeyEvent::Printable(char::from(it)),
            other => KeyEvent::Unrecognized(smallvec![other]),
        };

        DEBUG_SHELL_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "WindowsKeyDecoder::next_key", key = ?key);
        });

        Ok(Some(key))
    }
}
