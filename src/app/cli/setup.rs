//! Setup command implementation.

use std::path::PathBuf;

use crate::app::api::SetupOptions;
use crate::domain::AppError;

pub fn run_setup(
    path: Option<PathBuf>,
    python: &str,
    auto_install: Option<bool>,
    smoke_test: bool,
) -> Result<(), AppError> {
    let root = super::resolve_root(path)?;
    let options = SetupOptions { auto_install, smoke_test };
    crate::app::api::setup_at(root, python, options)?;
    Ok(())
}
