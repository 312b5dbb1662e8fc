//! Setup command: bootstrap the analysis project in place.
//!
//! Steps run in a fixed order and the first failure stops the run. Files
//! written before a failure stay on disk; every write is safe to repeat.

pub(crate) mod dependencies;
mod documents;
mod layout;
pub(crate) mod runtime;
mod smoke;

use tracing::info;

use crate::app::AppContext;
use crate::app::commands::sample::{self, SampleStatus};
use crate::domain::project_paths::{DASHBOARD_CONFIG, SAMPLE_DATASET};
use crate::domain::{AppError, ProjectProfile, PythonVersion, REQUIRED_DEPENDENCIES};
use crate::ports::{ConsentPrompt, ProjectStore, PythonRuntime};

/// Options for the setup command.
#[derive(Debug, Clone)]
pub struct SetupOptions {
    /// Preset answer to the install prompt. `None` asks the operator.
    pub auto_install: Option<bool>,
    /// Run the post-install smoke test.
    pub smoke_test: bool,
}

impl Default for SetupOptions {
    fn default() -> Self {
        Self { auto_install: None, smoke_test: true }
    }
}

/// Result of a successful setup run.
#[derive(Debug, Clone)]
pub struct SetupOutcome {
    /// Interpreter version that passed the check.
    pub python_version: PythonVersion,
    /// Directories that did not exist before this run.
    pub created_dirs: Vec<String>,
    /// Files written this run, relative to the project root.
    pub written_files: Vec<String>,
    /// Packages that failed the import probe.
    pub missing_packages: Vec<String>,
    /// Packages installed through pip.
    pub installed_packages: Vec<String>,
    /// Outcome of the sample-data step.
    pub sample: SampleStatus,
    /// Whether the smoke test ran (and passed).
    pub smoke_tested: bool,
}

/// Execute the setup flow.
pub fn execute<S, P, C>(
    ctx: &AppContext<S, P, C>,
    options: &SetupOptions,
    profile: &ProjectProfile,
) -> Result<SetupOutcome, AppError>
where
    S: ProjectStore,
    P: PythonRuntime,
    C: ConsentPrompt,
{
    info!(root = %ctx.store().root().display(), "starting setup");
    println!("🦠 {} Project Setup", profile.project_title);
    println!("{}", "=".repeat(50));

    let python_version = runtime::check_python_version(ctx.python())?;

    let created_dirs = layout::create_directory_structure(ctx.store())?;
    let mut written_files = vec![DASHBOARD_CONFIG.to_string()];

    let missing_packages =
        dependencies::check_dependencies(ctx.python(), &REQUIRED_DEPENDENCIES)?;
    let installed_packages =
        dependencies::install_missing(ctx.python(), ctx.consent(), &missing_packages)?;

    let sample = sample::execute(ctx.store(), profile, false)?;
    if sample.generated() {
        written_files.push(SAMPLE_DATASET.to_string());
    }

    written_files.extend(documents::write_readmes(ctx.store(), profile)?);
    written_files.extend(documents::write_launch_scripts(ctx.store(), profile)?);
    written_files.push(documents::write_license(ctx.store(), profile)?);

    let smoke_tested = if options.smoke_test {
        smoke::run_basic_tests(ctx.python())?;
        true
    } else {
        println!("\n⏭️  Skipping basic tests");
        false
    };

    print_completion(profile);
    info!(files = written_files.len(), "setup complete");

    Ok(SetupOutcome {
        python_version,
        created_dirs,
        written_files,
        missing_packages,
        installed_packages,
        sample,
        smoke_tested,
    })
}

fn print_completion(profile: &ProjectProfile) {
    println!("\n🎉 Setup complete!");
    println!("\n📋 Next steps:");
    println!("1. Download {} from Kaggle (see data/README.md)", profile.primary_dataset);
    println!("2. Run analysis: python {}", profile.analysis_script);
    println!("3. Launch dashboard: streamlit run {}", profile.dashboard_entry);
    println!(
        "   Or use: ./{} / {}",
        profile.launch_script_unix, profile.launch_script_windows
    );
    println!("\n📚 Project structure:");
    println!("├── {:<28} # Main analysis script", profile.analysis_script);
    println!("├── {:<28} # Web dashboard", profile.dashboard_entry);
    println!("├── {:<28} # Jupyter notebook", profile.notebook);
    println!("├── {:<28} # Dependencies", "requirements.txt");
    println!("├── {:<28} # Project documentation", "README.md");
    println!("├── {:<28} # Dataset directory", "data/");
    println!("├── {:<28} # Generated files", "outputs/");
    println!("└── {:<28} # Additional documentation", "docs/");
}
