use std::io;

use thiserror::Error;

/// Library-wide error type for cordboot operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Python interpreter is older than the minimum supported version.
    #[error("Python {required} or higher is required (found {found})")]
    UnsupportedRuntimeVersion { found: String, required: String },

    /// Python interpreter could not be executed or did not report a version.
    #[error("Python interpreter '{interpreter}' is not usable: {details}")]
    RuntimeUnavailable { interpreter: String, details: String },

    /// Missing packages were not installed, either declined or failed.
    #[error("Missing packages were not installed ({reason}): {}", .missing.join(", "))]
    DependencyResolutionIncomplete { missing: Vec<String>, reason: String },

    /// An installed package did not behave as expected.
    #[error("Smoke test failed: {0}")]
    SmokeTestFailure(String),

    /// External command exited unsuccessfully.
    #[error("Command '{command}' failed: {details}")]
    CommandFailed { command: String, details: String },

    /// Interactive prompt could not be completed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Embedded template missing or failed to render.
    #[error("Template error: {0}")]
    Template(String),

    /// CSV encoding error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl From<minijinja::Error> for AppError {
    fn from(err: minijinja::Error) -> Self {
        AppError::Template(err.to_string())
    }
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers that only need the category.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::UnsupportedRuntimeVersion { .. } => io::ErrorKind::Unsupported,
            AppError::RuntimeUnavailable { .. } => io::ErrorKind::NotFound,
            AppError::DependencyResolutionIncomplete { .. }
            | AppError::SmokeTestFailure(_)
            | AppError::CommandFailed { .. } => io::ErrorKind::Other,
            AppError::Prompt(_) => io::ErrorKind::Interrupted,
            AppError::Template(_) | AppError::Csv(_) | AppError::TomlSerialize(_) => {
                io::ErrorKind::InvalidData
            }
        }
    }
}
