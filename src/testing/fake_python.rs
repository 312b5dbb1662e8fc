use std::collections::HashSet;
use std::sync::Mutex;

use crate::domain::{AppError, PythonVersion};
use crate::ports::PythonRuntime;

/// In-memory interpreter: every module imports unless listed, pip and snippets
/// succeed unless configured to fail. Calls are recorded for assertions.
pub struct FakePython {
    version: Option<String>,
    unavailable_modules: HashSet<String>,
    install_error: Option<String>,
    snippet_error: Option<String>,
    probed: Mutex<Vec<String>>,
    installs: Mutex<Vec<Vec<String>>>,
    snippets: Mutex<Vec<String>>,
}

impl FakePython {
    pub fn new() -> Self {
        Self {
            version: Some("3.11.4".to_string()),
            unavailable_modules: HashSet::new(),
            install_error: None,
            snippet_error: None,
            probed: Mutex::new(Vec::new()),
            installs: Mutex::new(Vec::new()),
            snippets: Mutex::new(Vec::new()),
        }
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    /// The interpreter cannot be started at all.
    pub fn unavailable(mut self) -> Self {
        self.version = None;
        self
    }

    pub fn without_modules(mut self, modules: &[&str]) -> Self {
        self.unavailable_modules.extend(modules.iter().map(|m| m.to_string()));
        self
    }

    pub fn failing_install(mut self, details: &str) -> Self {
        self.install_error = Some(details.to_string());
        self
    }

    pub fn failing_snippet(mut self, details: &str) -> Self {
        self.snippet_error = Some(details.to_string());
        self
    }

    pub fn probed_modules(&self) -> Vec<String> {
        self.probed.lock().unwrap().clone()
    }

    pub fn install_calls(&self) -> Vec<Vec<String>> {
        self.installs.lock().unwrap().clone()
    }

    pub fn snippets_run(&self) -> Vec<String> {
        self.snippets.lock().unwrap().clone()
    }
}

impl Default for FakePython {
    fn default() -> Self {
        Self::new()
    }
}

impl PythonRuntime for FakePython {
    fn interpreter(&self) -> &str {
        "fake-python"
    }

    fn version(&self) -> Result<PythonVersion, AppError> {
        let raw = self.version.as_deref().ok_or_else(|| AppError::RuntimeUnavailable {
            interpreter: self.interpreter().to_string(),
            details: "No such file or directory".to_string(),
        })?;
        PythonVersion::parse(raw).ok_or_else(|| AppError::RuntimeUnavailable {
            interpreter: self.interpreter().to_string(),
            details: format!("unrecognized version output: {}", raw),
        })
    }

    fn has_module(&self, module: &str) -> Result<bool, AppError> {
        self.probed.lock().unwrap().push(module.to_string());
        Ok(!self.unavailable_modules.contains(module))
    }

    fn install(&self, packages: &[String]) -> Result<(), AppError> {
        self.installs.lock().unwrap().push(packages.to_vec());
        match &self.install_error {
            Some(details) => Err(AppError::CommandFailed {
                command: format!("pip install {}", packages.join(" ")),
                details: details.clone(),
            }),
            None => Ok(()),
        }
    }

    fn run_snippet(&self, code: &str) -> Result<(), AppError> {
        self.snippets.lock().unwrap().push(code.to_string());
        match &self.snippet_error {
            Some(details) => Err(AppError::CommandFailed {
                command: format!("{} -c <snippet>", self.interpreter()),
                details: details.clone(),
            }),
            None => Ok(()),
        }
    }
}
