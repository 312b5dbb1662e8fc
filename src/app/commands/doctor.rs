//! Doctor command: read-only environment report.
//!
//! Runs the runtime check and the dependency probe from `setup` without
//! writing anything, and notes whether the primary dataset is in place.

use crate::app::commands::setup::{dependencies, runtime};
use crate::domain::project_paths::PRIMARY_DATASET;
use crate::domain::{AppError, PythonVersion, REQUIRED_DEPENDENCIES};
use crate::ports::{ProjectStore, PythonRuntime};

#[derive(Debug, Clone, Default)]
pub struct DoctorOptions {
    /// Treat a missing primary dataset as a failure.
    pub strict: bool,
}

#[derive(Debug, Clone)]
pub struct DoctorOutcome {
    pub python_version: PythonVersion,
    pub missing_packages: Vec<String>,
    pub primary_dataset_present: bool,
    pub exit_code: i32,
}

pub fn execute<S, P>(store: &S, python: &P, options: &DoctorOptions) -> Result<DoctorOutcome, AppError>
where
    S: ProjectStore,
    P: PythonRuntime,
{
    let python_version = runtime::check_python_version(python)?;
    let missing_packages = dependencies::check_dependencies(python, &REQUIRED_DEPENDENCIES)?;

    let primary_dataset_present = store.exists(PRIMARY_DATASET);
    if primary_dataset_present {
        println!("\n✅ {} found", PRIMARY_DATASET);
    } else {
        println!("\n⚠️  {} not found (run `cordboot sample` for demo data)", PRIMARY_DATASET);
    }

    let exit_code = if !missing_packages.is_empty() {
        1
    } else if !primary_dataset_present && options.strict {
        2
    } else {
        0
    };

    Ok(DoctorOutcome { python_version, missing_packages, primary_dataset_present, exit_code })
}
