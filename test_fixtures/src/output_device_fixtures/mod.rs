// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod stdout_mock;

// Re-export.
pub use stdout_mock::*;
