//! Doctor command implementation.

use std::path::PathBuf;

use crate::app::api::DoctorOptions;
use crate::domain::AppError;

pub fn run_doctor(path: Option<PathBuf>, python: &str, strict: bool) -> Result<i32, AppError> {
    let root = super::resolve_root(path)?;
    let outcome = crate::app::api::doctor_at(root, python, DoctorOptions { strict })?;

    if outcome.missing_packages.is_empty() {
        println!("\n✅ All required packages are installed");
    } else {
        println!("\n❌ Missing packages: {}", outcome.missing_packages.join(", "));
        println!("   Run `cordboot setup --yes` to install them");
    }
    Ok(outcome.exit_code)
}
