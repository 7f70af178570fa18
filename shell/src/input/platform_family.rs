// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

use crate::ShellError;

/// The two families of terminals, which encode arrow keys with structurally
/// different byte sequences. See [`decoder_for()`].
///
/// This is a plain configuration value: it is resolved once at startup (see
/// [`PlatformFamily::detect()`]) and passed into the decoder, so a decoder for either
/// family can be exercised with synthetic bytes on any host.
///
/// [`decoder_for()`]: crate::decoder_for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum PlatformFamily {
    /// VT100 / ANSI escape sequences (Linux, macOS, BSD).
    Unix,
    /// Windows console, `_getch()` style extended-key prefixes.
    Windows,
}

impl PlatformFamily {
    /// Detect the family of the host this process runs on.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::UnsupportedPlatform`] on hosts that are neither Unix-like
    /// nor Windows. This is fatal: there is no fallback.
    pub fn detect() -> Result<Self, ShellError> {
        Self::from_os_family(std::env::consts::FAMILY, std::env::consts::OS)
    }

    /// Map a [`std::env::consts::FAMILY`] value to a platform family.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::UnsupportedPlatform`] (naming `os`) for any family other
    /// than `unix` or `windows`.
    pub fn from_os_family(family: &str, os: &'static str) -> Result<Self, ShellError> {
        match family {
            "unix" => Ok(PlatformFamily::Unix),
            "windows" => Ok(PlatformFamily::Windows),
            _ => Err(ShellError::UnsupportedPlatform { os }),
        }
    }
}
