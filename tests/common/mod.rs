//! Shared testing utilities for cordboot CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `cordboot` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("cordboot").expect("Failed to locate cordboot binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Path of a file inside the work directory.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.join(relative)
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write test file");
    }

    /// File recording every `pip install` invocation of the fake interpreter.
    pub fn pip_log(&self) -> PathBuf {
        self.root.path().join("pip.log")
    }

    /// Arguments of each recorded `pip install` call, one line per call.
    pub fn pip_calls(&self) -> Vec<String> {
        fs::read_to_string(self.pip_log())
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Write a shell script standing in for the Python interpreter.
    ///
    /// It reports `version`, fails `import <m>` for each module in `missing`,
    /// logs `-m pip` calls to [`pip_log`](Self::pip_log) and exits with
    /// `pip_exit` for them. Every other `-c` snippet succeeds.
    #[cfg(unix)]
    pub fn fake_python(&self, version: &str, missing: &[&str], pip_exit: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let mut script = String::from("#!/bin/sh\n");
        script.push_str("if [ \"$1\" = \"-m\" ] && [ \"$2\" = \"pip\" ]; then\n");
        script.push_str("  shift 2\n");
        script.push_str(&format!("  echo \"$*\" >> '{}'\n", self.pip_log().display()));
        script.push_str(&format!("  exit {}\n", pip_exit));
        script.push_str("fi\n");
        script.push_str("case \"$2\" in\n");
        script.push_str(&format!("  *version_info*) echo {}; exit 0 ;;\n", version));
        for module in missing {
            script.push_str(&format!("  \"import {}\") exit 1 ;;\n", module));
        }
        script.push_str("esac\nexit 0\n");

        let path = self.root.path().join(format!("python-{}", version));
        fs::write(&path, script).expect("Failed to write fake interpreter");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake interpreter executable");
        path
    }
}
