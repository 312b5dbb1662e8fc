use crate::domain::{AppError, PythonVersion};

/// Port for the Python interpreter the generated project runs on.
pub trait PythonRuntime {
    /// Interpreter command (e.g. `python3`), used in messages.
    fn interpreter(&self) -> &str;

    /// Report the interpreter's `major.minor.micro` version.
    ///
    /// Fails with `AppError::RuntimeUnavailable` when the interpreter cannot be
    /// executed or prints something that is not a version.
    fn version(&self) -> Result<PythonVersion, AppError>;

    /// Check whether `import <module>` succeeds.
    fn has_module(&self, module: &str) -> Result<bool, AppError>;

    /// Install or upgrade exactly the given packages through pip.
    ///
    /// Fails with `AppError::CommandFailed` when pip exits unsuccessfully.
    fn install(&self, packages: &[String]) -> Result<(), AppError>;

    /// Run a code snippet and fail with `AppError::CommandFailed` on non-zero exit.
    fn run_snippet(&self, code: &str) -> Result<(), AppError>;
}
