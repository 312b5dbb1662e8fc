//! Fixed project layout, relative to the project root.

// ── Directories ────────────────────────────────────────────────────────

pub const DATA_DIR: &str = "data";
pub const OUTPUTS_DIR: &str = "outputs";
pub const DOCS_DIR: &str = "docs";
pub const STREAMLIT_DIR: &str = ".streamlit";

/// Directories materialized on every setup run, in creation order.
pub const PROJECT_DIRS: [&str; 4] = [DATA_DIR, OUTPUTS_DIR, DOCS_DIR, STREAMLIT_DIR];

// ── Files ──────────────────────────────────────────────────────────────

/// `.streamlit/config.toml`
pub const DASHBOARD_CONFIG: &str = ".streamlit/config.toml";

/// Real CORD-19 metadata, never produced by cordboot.
pub const PRIMARY_DATASET: &str = "metadata.csv";

/// Synthetic stand-in written when the primary dataset is absent.
pub const SAMPLE_DATASET: &str = "metadata_sample.csv";

pub const DATA_README: &str = "data/README.md";
pub const OUTPUTS_README: &str = "outputs/README.md";
pub const LAUNCH_SCRIPT_UNIX: &str = "run_dashboard.sh";
pub const LAUNCH_SCRIPT_WINDOWS: &str = "run_dashboard.bat";
pub const LICENSE: &str = "LICENSE";

pub const DOCUMENTATION_FILES: [&str; 2] = [DATA_README, OUTPUTS_README];
pub const LAUNCH_SCRIPTS: [&str; 2] = [LAUNCH_SCRIPT_WINDOWS, LAUNCH_SCRIPT_UNIX];
