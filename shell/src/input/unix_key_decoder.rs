// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

//! Key decoder for VT100 / ANSI terminals. See [`UnixKeyDecoder`].

use crate::{ANSI_CSI_BRACKET, ANSI_ESC, ARROW_DOWN_FINAL, ARROW_LEFT_FINAL,
            ARROW_RIGHT_FINAL, ARROW_UP_FINAL, ASCII_CR, ASCII_DEL, ASCII_ETX,
            ASCII_LF, DEBUG_SHELL_MOD, KeyDecoder, KeyEvent, PlatformFamily,
            is_printable_ascii, read_byte};
use smallvec::smallvec;
use std::io::{self, Read};

/// States of the Unix decoder. Only `ESC` needs to be held, since the decoder can't
/// know what it means until it sees the next byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnixDecoderState {
    #[default]
    Start,
    SawEscape,
}

/// Decoder for Unix-like terminals.
///
/// | State       | Byte        | Emits                                   | Next        |
/// |-------------|-------------|-----------------------------------------|-------------|
/// | `Start`     | `ESC`       | nothing yet                             | `SawEscape` |
/// | `Start`     | other       | see [`decode_single_byte()`]            | `Start`     |
/// | `SawEscape` | `DEL`       | [`KeyEvent::MetaBackspace`]             | `Start`     |
/// | `SawEscape` | `[`         | read `d`: arrow for `A`/`B`/`C`/`D`, else `Unrecognized([ESC, '[', d])` | `Start` |
/// | `SawEscape` | other       | `Unrecognized([ESC, byte])`             | `Start`     |
///
/// There is no timeout on `ESC`: a lone Escape key press waits for the next key.
#[derive(Debug, Default)]
pub struct UnixKeyDecoder {
    state: UnixDecoderState,
}

impl UnixKeyDecoder {
    #[must_use]
    pub fn state(&self) -> UnixDecoderState { self.state }

    /// The CSI final byte has been read; map it to an arrow or give up on the whole
    /// sequence.
    fn decode_csi_final(final_byte: u8) -> KeyEvent {
        match final_byte {
            ARROW_UP_FINAL => KeyEvent::ArrowUp,
            ARROW_DOWN_FINAL => KeyEvent::ArrowDown,
            ARROW_RIGHT_FINAL => KeyEvent::ArrowRight,
            ARROW_LEFT_FINAL => KeyEvent::ArrowLeft,
            other => KeyEvent::Unrecognized(smallvec![ANSI_ESC, ANSI_CSI_BRACKET, other]),
        }
    }
}

/// Decode a byte seen in the `Start` state (other than `ESC`).
#[must_use]
pub fn decode_single_byte(byte: u8) -> KeyEvent {
    match byte {
        ASCII_ETX => KeyEvent::ControlC,
        ASCII_DEL => KeyEvent::Backspace,
        ASCII_LF | ASCII_CR => KeyEvent::Enter,
        it if is_printable_ascii(it) => KeyEvent::Printable(char::from(it)),
        other => KeyEvent::Unrecognized(smallvec![other]),
    }
}

impl KeyDecoder for UnixKeyDecoder {
    fn platform_family(&self) -> PlatformFamily { PlatformFamily::Unix }

    fn next_key(&mut self, input: &mut dyn Read) -> io::Result<Option<KeyEvent>> {
        let key = loop {
            let Some(byte) = read_byte(input)? else {
                // End of stream. A held ESC is reported, not dropped.
                break match self.state {
                    UnixDecoderState::Start => None,
                    UnixDecoderState::SawEscape => {
                        Some(KeyEvent::Unrecognized(smallvec![ANSI_ESC]))
                    }
                };
            };

            match (self.state, byte) {
                (UnixDecoderState::Start, ANSI_ESC) => {
                    self.state = UnixDecoderState::SawEscape;
                }
                (UnixDecoderState::Start, other) => {
                    break Some(decode_single_byte(other));
                }
                (UnixDecoderState::SawEscape, ASCII_DEL) => {
                    break Some(KeyEvent::MetaBackspace);
                }
                (UnixDecoderState::SawEscape, ANSI_CSI_BRACKET) => {
                    break Some(match read_byte(input)? {
                        Some(final_byte) => Self::decode_csi_final(final_byte),
                        None => KeyEvent::Unrecognized(smallvec![
                            ANSI_ESC,
                            ANSI_CSI_BRACKET
                        ]),
                    });
                }
                (UnixDecoderState::SawEscape, other) => {
                    break Some(KeyEvent::Unrecognized(smallvec![ANSI_ESC, other]));
                }
            }
        };

        self.state = UnixDecoderState::Start;

        DEBUG_SHELL_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "UnixKeyDecoder::next_key", key = ?key);
        });

        Ok(key)
    }
}
