//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::project_filesystem::FilesystemProjectStore;
use crate::adapters::python_command::PythonCommandAdapter;
use crate::adapters::terminal_consent::TerminalConsent;
use crate::app::{
    AppContext,
    commands::{doctor, sample, setup},
};
use crate::domain::ProjectProfile;

pub use crate::app::commands::doctor::{DoctorOptions, DoctorOutcome};
pub use crate::app::commands::sample::SampleStatus;
pub use crate::app::commands::setup::{SetupOptions, SetupOutcome};
pub use crate::domain::AppError;

/// Interpreter used when the caller does not name one.
pub const DEFAULT_PYTHON: &str = "python3";

// =============================================================================
// Setup Command API
// =============================================================================

/// Bootstrap the project in the current directory.
pub fn setup(python: &str, options: SetupOptions) -> Result<SetupOutcome, AppError> {
    setup_at(std::env::current_dir()?, python, options)
}

/// Bootstrap the project at the specified root.
pub fn setup_at(
    root: impl Into<PathBuf>,
    python: &str,
    options: SetupOptions,
) -> Result<SetupOutcome, AppError> {
    let root = root.into();
    let ctx = AppContext::new(
        FilesystemProjectStore::new(root.clone()),
        PythonCommandAdapter::from_invocation_dir(python, root)?,
        TerminalConsent::new(options.auto_install),
    );
    setup::execute(&ctx, &options, &ProjectProfile::cord19())
}

// =============================================================================
// Doctor Command API
// =============================================================================

/// Report runtime and dependency health for the project at `root`. Writes nothing.
pub fn doctor_at(
    root: impl Into<PathBuf>,
    python: &str,
    options: DoctorOptions,
) -> Result<DoctorOutcome, AppError> {
    let root = root.into();
    let store = FilesystemProjectStore::new(root.clone());
    let runtime = PythonCommandAdapter::from_invocation_dir(python, root)?;
    doctor::execute(&store, &runtime, &options)
}

// =============================================================================
// Sample Command API
// =============================================================================

/// Write the sample dataset at `root`; see [`SampleStatus`].
pub fn generate_sample_at(root: impl Into<PathBuf>, force: bool) -> Result<SampleStatus, AppError> {
    let store = FilesystemProjectStore::new(root.into());
    sample::execute(&store, &ProjectProfile::cord19(), force)
}
