// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

//! Tracing setup. The editor itself only calls the [`tracing`] macros; this module
//! decides where (and whether) those events end up.

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
