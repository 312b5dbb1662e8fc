use tracing::debug;

use crate::domain::{AppError, MIN_PYTHON_VERSION, PythonVersion};
use crate::ports::PythonRuntime;

/// Fail fast unless the interpreter meets the minimum supported version.
pub(crate) fn check_python_version<P: PythonRuntime>(python: &P) -> Result<PythonVersion, AppError> {
    let version = python.version().inspect_err(|err| {
        println!("❌ Could not query Python interpreter '{}'", python.interpreter());
        debug!(error = %err, "version probe failed");
    })?;

    if !version.is_supported() {
        println!("❌ Python {} or higher is required!", MIN_PYTHON_VERSION);
        println!("   Current version: {}", version);
        return Err(AppError::UnsupportedRuntimeVersion {
            found: version.to_string(),
            required: MIN_PYTHON_VERSION.to_string(),
        });
    }

    println!("✅ Python version: {}", version);
    Ok(version)
}
