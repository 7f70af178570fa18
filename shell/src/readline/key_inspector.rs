// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

use crate::{CRLF, KeyDecoder, KeyEvent};
use std::io::{self, Read, Write};

/// Diagnostic mode: print the [`Debug`] form of every decoded key on its own line,
/// until `Ctrl+C` or the end of the stream. Nothing is edited.
///
/// Raw mode disables output post-processing, so each line ends with an explicit
/// `CRLF`. Returns the number of keys printed, `Ctrl+C` included.
///
/// # Errors
///
/// Returns an error if reading from `input` or writing to `term` fails.
pub fn inspect_keys(
    decoder: &mut dyn KeyDecoder,
    input: &mut dyn Read,
    term: &mut dyn Write,
) -> io::Result<usize> {
    let mut count = 0;
    while let Some(key) = decoder.next_key(input)? {
        count += 1;
        write!(term, "{key:?}{CRLF}")?;
        term.flush()?;
        if key == KeyEvent::ControlC {
            break;
        }
    }
    Ok(count)
}
