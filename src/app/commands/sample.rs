//! Sample command: write the synthetic dataset used when `metadata.csv` is absent.

use crate::domain::project_paths::{PRIMARY_DATASET, SAMPLE_DATASET};
use crate::domain::sample_data::{self, SAMPLE_SIZE};
use crate::domain::{AppError, ProjectProfile};
use crate::ports::ProjectStore;

/// What the sample step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleStatus {
    /// `metadata_sample.csv` was written with this many data rows.
    Generated { rows: usize },
    /// The primary dataset is present; nothing was written.
    PrimaryPresent,
}

impl SampleStatus {
    pub fn generated(&self) -> bool {
        matches!(self, SampleStatus::Generated { .. })
    }
}

/// Write the sample dataset unless the primary dataset exists.
///
/// With `force`, the sample is written regardless. The primary dataset's
/// content is never inspected.
pub fn execute<S: ProjectStore>(
    store: &S,
    profile: &ProjectProfile,
    force: bool,
) -> Result<SampleStatus, AppError> {
    if store.exists(PRIMARY_DATASET) {
        if !force {
            println!("\n✅ {} found", PRIMARY_DATASET);
            return Ok(SampleStatus::PrimaryPresent);
        }
        println!("\n📊 {} found, regenerating sample data anyway...", PRIMARY_DATASET);
    } else {
        println!("\n📊 {} not found. Creating sample data...", PRIMARY_DATASET);
    }
    store.write_file(SAMPLE_DATASET, &sample_data::default_sample_csv()?)?;

    println!("   Created {} with {} sample records", SAMPLE_DATASET, SAMPLE_SIZE);
    println!("   💡 For full analysis, download the complete dataset from:");
    println!("      {}", profile.dataset_url);
    println!("   📝 See data/README.md for detailed instructions");

    Ok(SampleStatus::Generated { rows: SAMPLE_SIZE })
}
