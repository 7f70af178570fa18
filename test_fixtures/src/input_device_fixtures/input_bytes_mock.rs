// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

use std::{collections::VecDeque,
          io::{Read, Result}};

/// Synthetic raw byte stream, standing in for a terminal in raw mode.
///
/// Each call to [`Read::read`] hands out at most **one** byte, which is what a
/// terminal with `VMIN=1` delivers when keys are typed slowly. This makes sure that
/// the decoders never depend on a multi-byte sequence arriving in a single read.
/// Once all the bytes are consumed, `read` returns `Ok(0)` (end of stream).
#[derive(Debug, Clone, Default)]
pub struct InputBytesMock {
    bytes: VecDeque<u8>,
    read_calls: usize,
}

impl InputBytesMock {
    pub fn new(bytes: impl AsRef<[u8]>) -> Self {
        Self {
            bytes: bytes.as_ref().iter().copied().collect(),
            read_calls: 0,
        }
    }

    /// Append more bytes to the end of the stream.
    pub fn push(&mut self, bytes: impl AsRef<[u8]>) {
        self.bytes.extend(bytes.as_ref().iter().copied());
    }

    /// Number of bytes that haven't been read yet.
    #[must_use]
    pub fn remaining(&self) -> usize { self.bytes.len() }

    /// Number of times [`Read::read`] was called (including the ones that hit the end
    /// of the stream).
    #[must_use]
    pub fn read_calls(&self) -> usize { self.read_calls }
}

impl Read for InputBytesMock {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.read_calls += 1;
        if buf.is_empty() {
            return Ok(0);
        }
        match self.bytes.pop_front() {
            Some(byte) => {
                buf[0] = byte;
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
