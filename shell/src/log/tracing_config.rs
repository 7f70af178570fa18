// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "iris_shell.log";

/// Configure the tracing logging to suit your needs. You can send the logs to a:
/// 1. file,
/// 2. stdout or stderr,
/// 3. both,
/// 4. nowhere.
///
/// Keep in mind that while a line is being edited, stdout carries the rendered frame.
/// Anything logged to [`DisplayPreference::Stdout`] lands in the middle of it, so the
/// shell binary only ever logs to a file.
///
/// Use [`crate::try_initialize_logging_global()`] to install it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level: tracing::Level,
}

/// Where the formatted events are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String /* log file path */),
    DisplayAndFile(DisplayPreference, String /* log file path */),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    pub fn new_file(filename: Option<String>, level: tracing::Level) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level,
        }
    }

    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level: tracing::Level::DEBUG,
        }
    }

    /// Logging switched off.
    pub fn disabled() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level: tracing::Level::DEBUG,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { LevelFilter::from_level(self.level) }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            writer_config,
            level: tracing::Level::DEBUG,
        }
    }
}
