// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

//! The terminal as a byte source. See [`RawInputSource`].

use crate::RawModeGuard;
use std::io::{self, Read};

/// The controlling terminal in raw mode, read one byte at a time.
///
/// - [`RawInputSource::open()`] acquires raw mode through a [`RawModeGuard`]; the
///   prior mode is restored when this value is dropped, on every exit path.
/// - [`Read::read`] blocks until at least one byte is available and never returns
///   more than one. On Windows, an extended key is two `_getch()` results, so the
///   decoder issues a second read when it sees the prefix byte.
///
/// ```no_run
/// use iris_shell::{EditorLoop, PlatformFamily, RawInputSource, decoder_for};
///
/// let mut input = RawInputSource::open()?;
/// let mut editor = EditorLoop::new("> ", decoder_for(PlatformFamily::detect()?));
/// let _event = editor.readline(&mut input, &mut std::io::stdout()).map_err(iris_shell::ShellError::from)?;
/// drop(input); // Terminal restored.
/// # Ok::<(), miette::Report>(())
/// ```
#[derive(Debug)]
pub struct RawInputSource {
    #[cfg(unix)]
    terminal: crate::TerminalFd,
    _guard: RawModeGuard,
}

impl RawInputSource {
    /// Put the terminal in raw mode and get ready to read from it.
    ///
    /// # Errors
    ///
    /// Returns miette diagnostic errors if there is no terminal, raw mode can't be
    /// enabled, or the platform is not supported. None of these are retried.
    pub fn open() -> miette::Result<Self> {
        let guard = RawModeGuard::new()?;

        #[cfg(unix)]
        {
            let terminal = crate::get_terminal_fd()?;
            Ok(Self {
                terminal,
                _guard: guard,
            })
        }

        #[cfg(not(unix))]
        {
            Ok(Self { _guard: guard })
        }
    }
}

impl Read for RawInputSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        #[cfg(unix)]
        {
            self.terminal.read(&mut buf[..1])
        }

        #[cfg(windows)]
        {
            buf[0] = windows_console::getch()?;
            Ok(1)
        }

        #[cfg(not(any(unix, windows)))]
        {
            Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "raw terminal input is not supported on this platform",
            ))
        }
    }
}

#[cfg(windows)]
mod windows_console {
    use std::{ffi::c_int, io};

    // The C runtime's unbuffered, unechoed console read. Extended keys come back as
    // two calls: a prefix (0x00 or 0xE0), then the scan code.
    unsafe extern "C" {
        safe fn _getch() -> c_int;
    }

    pub fn getch() -> io::Result<u8> {
        u8::try_from(_getch())
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "_getch() out of range"))
    }
}
