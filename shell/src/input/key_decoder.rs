// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

//! The decoder seam. See [`KeyDecoder`].

use crate::{KeyEvent, PlatformFamily, UnixKeyDecoder, WindowsKeyDecoder};
use std::{fmt::Debug,
          io::{self, Read}};

/// Turns a raw byte stream into [`KeyEvent`]s, one per call.
///
/// There is one implementation per [`PlatformFamily`]. Pick it once with
/// [`decoder_for()`]; nothing downstream branches on the platform again.
///
/// Decoders pull bytes themselves with [`read_byte()`], so a multi-byte sequence is
/// resolved by issuing extra reads (one byte each), never by buffering ahead.
pub trait KeyDecoder: Debug {
    /// Which key table this decoder implements.
    fn platform_family(&self) -> PlatformFamily;

    /// Block until one complete key is decoded.
    ///
    /// - `Ok(Some(key))`: exactly one key. Bytes that match no pattern come back as
    ///   [`KeyEvent::Unrecognized`]; a recognized prefix is always fully consumed,
    ///   even when the byte after it is unmapped.
    /// - `Ok(None)`: the stream ended on a key boundary. If it ends in the middle of a
    ///   sequence, the bytes read so far are returned as
    ///   [`KeyEvent::Unrecognized`] first.
    ///
    /// # Errors
    ///
    /// Returns any error from `input` other than [`io::ErrorKind::Interrupted`].
    fn next_key(&mut self, input: &mut dyn Read) -> io::Result<Option<KeyEvent>>;
}

/// Build the decoder for the given family.
#[must_use]
pub fn decoder_for(platform_family: PlatformFamily) -> Box<dyn KeyDecoder> {
    match platform_family {
        PlatformFamily::Unix => Box::new(UnixKeyDecoder::default()),
        PlatformFamily::Windows => Box::new(WindowsKeyDecoder),
    }
}

/// Read exactly one byte. Returns `Ok(None)` at the end of the stream, and retries
/// reads interrupted by a signal.
///
/// # Errors
///
/// Returns any error from `input` other than [`io::ErrorKind::Interrupted`].
pub fn read_byte(input: &mut dyn Read) -> io::Result<Option<u8>> {
    let mut buf = [0_u8; 1];
    loop {
        match input.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(error) if error.kind() == io::ErrorKind::Interrupted => {}
            Err(error) => return Err(error),
        }
    }
}

/// Decode every key in `input` until the end of the stream.
///
/// # Errors
///
/// Returns the first error from [`KeyDecoder::next_key()`].
pub fn decode_all(
    decoder: &mut dyn KeyDecoder,
    input: &mut dyn Read,
) -> io::Result<Vec<KeyEvent>> {
    let mut keys = vec![];
    while let Some(key) = decoder.next_key(input)? {
        keys.push(key);
    }
    Ok(keys)
}
