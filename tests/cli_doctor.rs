#![cfg(unix)]

mod common;

use common::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn doctor_reports_healthy_environment() {
    let ctx = TestContext::new();
    let python = ctx.fake_python("3.12.1", &[], 0);

    ctx.cli()
        .args(["doctor", "--python"])
        .arg(&python)
        .assert()
        .success()
        .stdout(predicate::str::contains("All required packages are installed"));

    assert_eq!(fs::read_dir(ctx.work_dir()).unwrap().count(), 0);
}

#[test]
fn doctor_exits_one_on_missing_packages() {
    let ctx = TestContext::new();
    let python = ctx.fake_python("3.12.1", &["plotly"], 0);

    ctx.cli()
        .args(["d", "--python"])
        .arg(&python)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Missing packages: plotly"));

    assert!(ctx.pip_calls().is_empty());
}

#[test]
fn strict_doctor_requires_primary_dataset() {
    let ctx = TestContext::new();
    let python = ctx.fake_python("3.12.1", &[], 0);

    ctx.cli().args(["doctor", "--strict", "--python"]).arg(&python).assert().code(2);

    ctx.write("metadata.csv", "");
    ctx.cli().args(["doctor", "--strict", "--python"]).arg(&python).assert().success();
}

#[test]
fn doctor_rejects_old_python() {
    let ctx = TestContext::new();
    let python = ctx.fake_python("2.7.18", &[], 0);

    ctx.cli()
        .args(["doctor", "--python"])
        .arg(&python)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("found 2.7.18"));
}
