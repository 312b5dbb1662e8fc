pub mod project_filesystem;
pub mod python_command;
pub mod scaffold_assets;
pub mod terminal_consent;
