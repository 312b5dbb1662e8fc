use crate::domain::project_paths::{DASHBOARD_CONFIG, PROJECT_DIRS};
use crate::domain::{AppError, DashboardConfig};
use crate::ports::ProjectStore;

/// Create the fixed directory set and (re)write the dashboard config.
///
/// Returns the directories that did not exist before.
pub(crate) fn create_directory_structure<S: ProjectStore>(store: &S) -> Result<Vec<String>, AppError> {
    println!("\n📁 Creating directory structure...");

    let mut created = Vec::new();
    for dir in PROJECT_DIRS {
        if store.ensure_dir(dir)? {
            println!("   Created: {}/", dir);
            created.push(dir.to_string());
        } else {
            println!("   Exists:  {}/", dir);
        }
    }

    let config = DashboardConfig::default().to_toml()?;
    store.write_file(DASHBOARD_CONFIG, config.as_bytes())?;
    println!("   Created: {}", DASHBOARD_CONFIG);

    Ok(created)
}
