//! CLI Adapter.

mod doctor;
mod sample;
mod setup;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::api::DEFAULT_PYTHON;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "cordboot")]
#[command(version)]
#[command(
    about = "Bootstrap the CORD-19 analysis project: layout, dependencies, sample data",
    long_about = None
)]
struct Cli {
    /// Print diagnostic detail (interpreter commands, exit statuses) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ProjectArgs {
    /// Project directory (defaults to current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,
    /// Python interpreter used for probes, installs and the smoke test
    #[arg(long, default_value = DEFAULT_PYTHON)]
    python: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Create directories, install missing packages, write docs, scripts and sample data
    #[clap(visible_alias = "s")]
    Setup {
        #[command(flatten)]
        project: ProjectArgs,
        /// Install missing packages without asking
        #[arg(short, long, conflicts_with = "no_install")]
        yes: bool,
        /// Never install; fail if packages are missing
        #[arg(long, conflicts_with = "yes")]
        no_install: bool,
        /// Skip the post-install smoke test
        #[arg(long)]
        skip_smoke_test: bool,
    },
    /// Check the Python runtime and required packages without writing anything
    #[clap(visible_alias = "d")]
    Doctor {
        #[command(flatten)]
        project: ProjectArgs,
        /// Exit with status 2 when metadata.csv is missing
        #[arg(long)]
        strict: bool,
    },
    /// Write metadata_sample.csv
    Sample {
        /// Project directory (defaults to current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
        /// Write the sample even when metadata.csv exists
        #[arg(short, long)]
        force: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    crate::app::logging::init(cli.verbose);

    let result: Result<i32, AppError> = match cli.command {
        Commands::Setup { project, yes, no_install, skip_smoke_test } => {
            let auto_install = if yes {
                Some(true)
            } else if no_install {
                Some(false)
            } else {
                None
            };
            setup::run_setup(project.path, &project.python, auto_install, !skip_smoke_test)
                .map(|_| 0)
        }
        Commands::Doctor { project, strict } => {
            doctor::run_doctor(project.path, &project.python, strict)
        }
        Commands::Sample { path, force } => sample::run_sample(path, force).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn resolve_root(path: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match path {
        Some(p) => Ok(p),
        None => Ok(std::env::current_dir()?),
    }
}
