pub mod dashboard_config;
pub mod dependency;
pub mod error;
pub mod profile;
pub mod project_paths;
pub mod sample_data;
pub mod version;

pub use dashboard_config::DashboardConfig;
pub use dependency::{DependencyRequirement, REQUIRED_DEPENDENCIES, SMOKE_TEST_SNIPPET};
pub use error::AppError;
pub use profile::ProjectProfile;
pub use sample_data::SampleRecord;
pub use version::{MIN_PYTHON_VERSION, PythonVersion};
