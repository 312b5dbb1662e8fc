//! Project-root store operations.
//!
//! Paths passed to this port are relative to the project root and come from
//! `domain::project_paths`; the port owns only the I/O behavior.

use std::path::Path;

use crate::domain::AppError;

/// Port for reading and writing the project layout.
pub trait ProjectStore {
    /// Absolute path to the project root.
    fn root(&self) -> &Path;

    /// Check whether a file or directory exists.
    fn exists(&self, path: &str) -> bool;

    /// Create a directory (and parents) if missing.
    ///
    /// Returns `true` when the directory did not exist before the call.
    fn ensure_dir(&self, path: &str) -> Result<bool, AppError>;

    /// Write a file, replacing any existing content.
    fn write_file(&self, path: &str, content: &[u8]) -> Result<(), AppError>;

    /// Mark a file executable (mode 0755). No-op on platforms without permission bits.
    fn set_executable(&self, path: &str) -> Result<(), AppError>;
}
