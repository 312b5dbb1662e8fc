use tracing::debug;

use crate::adapters::scaffold_assets::{self, ScaffoldFile};
use crate::domain::project_paths::{
    DOCUMENTATION_FILES, LAUNCH_SCRIPT_UNIX, LAUNCH_SCRIPTS, LICENSE,
};
use crate::domain::{AppError, ProjectProfile};
use crate::ports::ProjectStore;

fn write_all<S: ProjectStore>(store: &S, files: &[ScaffoldFile]) -> Result<Vec<String>, AppError> {
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        store.write_file(&file.path, file.content.as_bytes())?;
        written.push(file.path.clone());
    }
    Ok(written)
}

/// Overwrite the `data/` and `outputs/` READMEs.
pub(crate) fn write_readmes<S: ProjectStore>(
    store: &S,
    profile: &ProjectProfile,
) -> Result<Vec<String>, AppError> {
    println!("\n📝 Creating documentation files...");
    let written = write_all(store, &scaffold_assets::render_all(&DOCUMENTATION_FILES, profile)?)?;
    for path in &written {
        println!("   Created: {}", path);
    }
    Ok(written)
}

/// Overwrite both launch scripts and mark the shell one executable.
///
/// The permission change is best-effort.
pub(crate) fn write_launch_scripts<S: ProjectStore>(
    store: &S,
    profile: &ProjectProfile,
) -> Result<Vec<String>, AppError> {
    println!("\n🚀 Creating launch scripts...");
    let written = write_all(store, &scaffold_assets::render_all(&LAUNCH_SCRIPTS, profile)?)?;

    if let Err(err) = store.set_executable(LAUNCH_SCRIPT_UNIX) {
        debug!(error = %err, path = LAUNCH_SCRIPT_UNIX, "could not mark launch script executable");
    }

    println!("   Created: {} (Windows)", profile.launch_script_windows);
    println!("   Created: {} (Unix/Linux/Mac)", profile.launch_script_unix);
    Ok(written)
}

/// Overwrite the MIT license.
pub(crate) fn write_license<S: ProjectStore>(
    store: &S,
    profile: &ProjectProfile,
) -> Result<String, AppError> {
    let file = scaffold_assets::render(LICENSE, profile)?;
    store.write_file(&file.path, file.content.as_bytes())?;
    println!("   Created: {}", file.path);
    Ok(file.path)
}
