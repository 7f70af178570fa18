// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;

#[derive(Debug)]
pub struct TempDir {
    pub path: std::path::PathBuf,
}

/// Create a temporary directory. The directory is automatically deleted when the
/// [`TempDir`] struct is dropped.
///
/// # Errors
///
/// Returns an error if the directory can't be created under [`std::env::temp_dir`].
pub fn create_temp_dir() -> miette::Result<TempDir> {
    let root = std::env::temp_dir();
    let new_temp_dir = root.join(format!("iris_shell_{}", uuid::Uuid::new_v4()));
    std::fs::create_dir(&new_temp_dir).into_diagnostic()?;
    Ok(TempDir { path: new_temp_dir })
}

impl Drop for TempDir {
    fn drop(&mut self) { drop(std::fs::remove_dir_all(&self.path)); }
}
