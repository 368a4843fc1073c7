#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Argument validation of the binaries.
//!
//! Every case here fails before `juju` is looked up, so no Juju client or
//! controller is needed. That includes configuration errors.

mod common;

use assert_cmd::Command;
use charm_lifecycle::CliError;
use charm_lifecycle::cli::{Args, execute};
use charm_lifecycle::lifecycle::{BundleSelector, Phase};
use clap::Parser;
use common::{CHARM_CONFIG, RecordingPhases, write_config};
use predicates::prelude::*;

fn func_test_runner() -> Command {
    Command::cargo_bin("func_test_runner").unwrap()
}

#[test]
fn smoke_and_dev_are_ambiguous() {
    func_test_runner()
        .args(["--smoke", "--dev", "--config", "/nonexistent/tests.yaml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Ambiguous arguments: --smoke and --dev cannot be used together",
        ));
}

#[test]
fn bundle_and_dev_are_ambiguous() {
    func_test_runner()
        .args(["--dev", "--bundle", "foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Ambiguous arguments: --bundle and --dev cannot be used together",
        ));
}

#[test]
fn bundle_and_smoke_are_ambiguous() {
    func_test_runner()
        .args(["--smoke", "-b", "foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Ambiguous arguments: --bundle and --smoke cannot be used together",
        ));
}

#[test]
fn invalid_log_level_is_rejected() {
    func_test_runner()
        .args(["--log", "invalid"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid log level: \"invalid\""));
}

#[test]
fn help_lists_every_flag() {
    func_test_runner()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--keep-model")
                .and(predicate::str::contains("--smoke"))
                .and(predicate::str::contains("--dev"))
                .and(predicate::str::contains("--bundle"))
                .and(predicate::str::contains("--log"))
                .and(predicate::str::contains("--config")),
        );
}

#[test]
fn charm_test_requires_model_name() {
    Command::cargo_bin("charm_test")
        .unwrap()
        .args(["-t", "juju.applications_active"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--model-name"));
}

#[test]
fn charm_test_rejects_invalid_log_level() {
    Command::cargo_bin("charm_test")
        .unwrap()
        .args(["-m", "zaza-0123456789ab", "--log", "chatty"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid log level: \"chatty\""));
}

#[tokio::test]
async fn invalid_log_level_never_reaches_the_runner() {
    let (_dir, config) = write_config(CHARM_CONFIG);
    let phases = RecordingPhases::new();

    let args = Args::try_parse_from([
        "func_test_runner",
        "--log",
        "invalid",
        "--config",
        config.to_str().unwrap(),
    ])
    .unwrap();

    match args.validate() {
        Err(CliError::InvalidLogLevel { level }) => assert_eq!(level, "invalid"),
        Ok(invocation) => {
            execute(&invocation, &phases).await.unwrap();
            panic!("invalid log level was accepted");
        }
        Err(other) => panic!("unexpected error: {other}"),
    }
    assert_eq!(phases.count(Phase::Configure), 0);
    assert!(phases.calls().is_empty());
}

#[tokio::test]
async fn smoke_and_dev_never_reach_provision() {
    let (_dir, config) = write_config(CHARM_CONFIG);
    let phases = RecordingPhases::new();

    let args = Args::try_parse_from([
        "func_test_runner",
        "--smoke",
        "--dev",
        "--config",
        config.to_str().unwrap(),
    ])
    .unwrap();

    match args.validate() {
        Err(CliError::AmbiguousArguments { first, second }) => {
            assert_eq!((first, second), ("--smoke", "--dev"));
        }
        Ok(invocation) => {
            execute(&invocation, &phases).await.unwrap();
            panic!("--smoke together with --dev was accepted");
        }
        Err(other) => panic!("unexpected error: {other}"),
    }
    assert_eq!(phases.count(Phase::Provision), 0);
    assert!(phases.calls().is_empty());
}

#[test]
fn config_error_is_reported_before_juju_is_looked_up() {
    let empty_path = tempfile::tempdir().unwrap();

    func_test_runner()
        .env("PATH", empty_path.path())
        .args(["--config", "/nonexistent/tests.yaml"])
        .assert()
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("Failed to read test config /nonexistent/tests.yaml")
                .and(predicate::str::contains("juju command not found").not()),
        );
}

#[tokio::test]
async fn validated_arguments_drive_the_runner() {
    let (_dir, config) = write_config(CHARM_CONFIG);
    let phases = RecordingPhases::new();

    let args = Args::try_parse_from([
        "func_test_runner",
        "--dev",
        "--keep-model",
        "--log",
        "debug",
        "--config",
        config.to_str().unwrap(),
    ])
    .unwrap();
    let invocation = args.validate().unwrap();
    assert_eq!(invocation.options.selector, BundleSelector::Dev);

    execute(&invocation, &phases).await.unwrap();

    assert_eq!(phases.count(Phase::Deploy), 2);
    assert_eq!(phases.count(Phase::Teardown), 1);
}
