mod common;

use common::TestContext;
use cordboot::{SampleStatus, generate_sample_at};

#[test]
fn generate_sample_at_reports_rows() {
    let ctx = TestContext::new();

    let status = generate_sample_at(ctx.work_dir(), false).unwrap();

    assert_eq!(status, SampleStatus::Generated { rows: 1000 });
    assert!(ctx.path("metadata_sample.csv").is_file());
}

#[test]
fn generate_sample_at_leaves_primary_alone() {
    let ctx = TestContext::new();
    ctx.write("metadata.csv", "cord_uid\n");

    assert_eq!(generate_sample_at(ctx.work_dir(), false).unwrap(), SampleStatus::PrimaryPresent);
    assert!(!ctx.path("metadata_sample.csv").exists());
}

#[cfg(unix)]
mod with_fake_interpreter {
    use super::*;
    use cordboot::{AppError, DoctorOptions, SetupOptions, doctor_at, setup_at};

    #[test]
    fn setup_at_returns_outcome() {
        let ctx = TestContext::new();
        let python = ctx.fake_python("3.9.18", &[], 0);
        let options = SetupOptions { auto_install: Some(false), smoke_test: true };

        let outcome = setup_at(ctx.work_dir(), &python.to_string_lossy(), options).unwrap();

        assert_eq!(outcome.python_version.to_string(), "3.9.18");
        assert_eq!(outcome.created_dirs, vec!["data", "outputs", "docs", ".streamlit"]);
        assert!(outcome.sample.generated());
        assert!(outcome.smoke_tested);
    }

    #[test]
    fn setup_at_surfaces_declined_install() {
        let ctx = TestContext::new();
        let python = ctx.fake_python("3.9.18", &["pandas"], 0);
        let options = SetupOptions { auto_install: Some(false), ..SetupOptions::default() };

        let err = setup_at(ctx.work_dir(), &python.to_string_lossy(), options).unwrap_err();

        assert!(matches!(
            err,
            AppError::DependencyResolutionIncomplete { ref missing, .. } if missing == &["pandas"]
        ));
    }

    #[test]
    fn doctor_at_is_read_only() {
        let ctx = TestContext::new();
        let python = ctx.fake_python("3.9.18", &["numpy"], 0);

        let outcome =
            doctor_at(ctx.work_dir(), &python.to_string_lossy(), DoctorOptions::default()).unwrap();

        assert_eq!(outcome.missing_packages, vec!["numpy"]);
        assert_eq!(outcome.exit_code, 1);
        assert!(!outcome.primary_dataset_present);
        assert!(ctx.pip_calls().is_empty());
    }
}
