//! Embedded documentation, launch-script and license templates.

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior};

use crate::domain::{AppError, ProjectProfile};

static SCAFFOLD_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/scaffold");

/// A rendered scaffold file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldFile {
    /// Path relative to the project root.
    pub path: String,
    /// Rendered content as UTF-8 text.
    pub content: String,
}

/// Raw template text for a project-relative path.
pub fn template_source(path: &str) -> Option<&'static str> {
    SCAFFOLD_DIR.get_file(path).and_then(|file| file.contents_utf8())
}

/// Render one template against the project profile.
pub fn render(path: &str, profile: &ProjectProfile) -> Result<ScaffoldFile, AppError> {
    let source = template_source(path)
        .ok_or_else(|| AppError::Template(format!("Missing scaffold template: {}", path)))?;

    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_template(path, source)?;
    let content = env.get_template(path)?.render(profile)?;

    Ok(ScaffoldFile { path: path.to_string(), content })
}

/// Render several templates, preserving order.
pub fn render_all(paths: &[&str], profile: &ProjectProfile) -> Result<Vec<ScaffoldFile>, AppError> {
    paths.iter().map(|path| render(path, profile)).collect()
}
