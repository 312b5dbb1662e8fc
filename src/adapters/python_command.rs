use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tracing::debug;

use crate::domain::{AppError, PythonVersion};
use crate::ports::PythonRuntime;

const VERSION_PROBE: &str = "import sys; print('.'.join(map(str, sys.version_info[:3])))";

/// `PythonRuntime` backed by an interpreter subprocess.
#[derive(Debug, Clone)]
pub struct PythonCommandAdapter {
    interpreter: String,
    cwd: PathBuf,
}

impl PythonCommandAdapter {
    pub fn new(interpreter: impl Into<String>, cwd: PathBuf) -> Self {
        Self { interpreter: interpreter.into(), cwd }
    }

    /// Like [`new`](Self::new), but a relative interpreter path such as
    /// `./venv/bin/python` is anchored at the caller's working directory
    /// rather than at `cwd`. Bare names like `python3` still go through `PATH`.
    pub fn from_invocation_dir(interpreter: &str, cwd: PathBuf) -> Result<Self, AppError> {
        let base = std::env::current_dir()?;
        Ok(Self::new(anchor_interpreter(interpreter, &base), cwd))
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(&self.interpreter);
        command.args(args).current_dir(&self.cwd);
        command
    }

    fn describe(&self, args: &[&str]) -> String {
        format!("{} {}", self.interpreter, args.join(" "))
    }

    fn unavailable(&self, details: impl Into<String>) -> AppError {
        AppError::RuntimeUnavailable { interpreter: self.interpreter.clone(), details: details.into() }
    }

    fn output(&self, args: &[&str]) -> Result<Output, AppError> {
        debug!(command = %self.describe(args), "spawning interpreter");
        let output = self.command(args).output().map_err(|e| self.unavailable(e.to_string()))?;
        debug!(status = %output.status, "interpreter exited");
        Ok(output)
    }
}

fn anchor_interpreter(interpreter: &str, base: &Path) -> String {
    let path = Path::new(interpreter);
    if path.is_relative() && path.components().count() > 1 {
        base.join(path).to_string_lossy().into_owned()
    } else {
        interpreter.to_string()
    }
}

fn stderr_or_status(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.is_empty() { output.status.to_string() } else { stderr }
}

impl PythonRuntime for PythonCommandAdapter {
    fn interpreter(&self) -> &str {
        &self.interpreter
    }

    fn version(&self) -> Result<PythonVersion, AppError> {
        let output = self.output(&["-c", VERSION_PROBE])?;
        if !output.status.success() {
            return Err(self.unavailable(stderr_or_status(&output)));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        PythonVersion::parse(&stdout)
            .ok_or_else(|| self.unavailable(format!("unrecognized version output '{}'", stdout.trim())))
    }

    fn has_module(&self, module: &str) -> Result<bool, AppError> {
        let code = format!("import {}", module);
        let output = self.output(&["-c", &code])?;
        Ok(output.status.success())
    }

    fn install(&self, packages: &[String]) -> Result<(), AppError> {
        let mut args = vec!["-m", "pip", "install", "--upgrade"];
        args.extend(packages.iter().map(String::as_str));

        debug!(command = %self.describe(&args), "installing packages");
        let status = self.command(&args).status().map_err(|e| self.unavailable(e.to_string()))?;
        if !status.success() {
            return Err(AppError::CommandFailed {
                command: self.describe(&args),
                details: status.to_string(),
            });
        }
        Ok(())
    }

    fn run_snippet(&self, code: &str) -> Result<(), AppError> {
        let output = self.output(&["-c", code])?;
        if !output.status.success() {
            return Err(AppError::CommandFailed {
                command: format!("{} -c <snippet>", self.interpreter),
                details: stderr_or_status(&output),
            });
        }
        Ok(())
    }
}
