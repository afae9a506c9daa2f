//! Error handling
//!
//! This module provides error handling using anyhow.
//! As an application (not a library), we prioritize ease of use over
//! complex error type hierarchies.

use std::fmt;
use std::path::{Path, PathBuf};

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, ensure, Error};
use anyhow::{Context, Result};

/// The input file was not found at its expected location.
///
/// This is the one condition the binary reports with its own diagnostic
/// line and exit status 1; every other failure propagates as a plain
/// anyhow error.
#[derive(Debug)]
pub struct MissingInput {
    path: PathBuf,
}

impl MissingInput {
    /// Record a missing file, resolving the path to absolute form so the
    /// diagnostic names the exact location that was probed.
    pub fn at(path: &Path) -> Self {
        let path =
            std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        Self { path }
    }

    /// The absolute path that was probed
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for MissingInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path.file_name() {
            Some(name) => write!(
                f,
                "{} not found at: {}",
                name.to_string_lossy(),
                self.path.display()
            ),
            None => {
                write!(f, "input file not found at: {}", self.path.display())
            }
        }
    }
}

impl std::error::Error for MissingInput {}

/// Helper for adding file operation context to an error
pub trait FileContext<T> {
    /// Add file operation context to an error
    fn with_file_context<P: AsRef<Path>>(
        self,
        operation: &str,
        path: P,
    ) -> Result<T>;
}

impl<T, E> FileContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_file_context<P: AsRef<Path>>(
        self,
        operation: &str,
        path: P,
    ) -> Result<T> {
        self.with_context(|| {
            format!("Failed to {} file: {}", operation, path.as_ref().display())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_names_file_and_absolute_path() {
        let missing = MissingInput::at(Path::new("some-dir/icons.json"));
        let text = missing.to_string();
        assert!(text.starts_with("icons.json not found at: "));
        assert!(missing.path().is_absolute());
    }

    #[test]
    fn missing_input_keeps_absolute_paths_as_given() {
        let missing = MissingInput::at(Path::new("/nonexistent/icons.json"));
        assert_eq!(
            missing.to_string(),
            "icons.json not found at: /nonexistent/icons.json"
        );
    }
}
