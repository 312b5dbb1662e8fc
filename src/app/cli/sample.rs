//! Sample command implementation.

use std::path::PathBuf;

use crate::app::api::SampleStatus;
use crate::domain::AppError;

pub fn run_sample(path: Option<PathBuf>, force: bool) -> Result<(), AppError> {
    let root = super::resolve_root(path)?;
    if crate::app::api::generate_sample_at(root, force)? == SampleStatus::PrimaryPresent {
        println!("   Sample not written; pass --force to write it anyway");
    }
    Ok(())
}
