//! Integration tests for the command-line binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

const FULL_RUN: &str = "\
Executing Order Processing Workflow:
Validating Order...
Processing Payment...
Shipping Order...

Executing Invoice Processing Workflow:
Generating Invoice...
Sending Invoice to Customer...

Executing Custom Workflow:
Preparing Special Order...
Notifying Customer...
";

fn bin() -> Command {
    let mut cmd = Command::new(cargo_bin("workflow-factory"));
    cmd.env_remove("WORKFLOW_FACTORY_WORKFLOWS")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn no_args_runs_every_workflow_in_order() -> Result<(), Box<dyn std::error::Error>> {
    bin().assert().success().stdout(FULL_RUN).stderr("");
    Ok(())
}

#[test]
fn run_without_selection_matches_default() -> Result<(), Box<dyn std::error::Error>> {
    bin().arg("run").assert().success().stdout(FULL_RUN);
    Ok(())
}

#[test]
fn run_single_workflow() -> Result<(), Box<dyn std::error::Error>> {
    bin()
        .args(["run", "--workflow", "invoice"])
        .assert()
        .success()
        .stdout(
            "Executing Invoice Processing Workflow:\n\
             Generating Invoice...\n\
             Sending Invoice to Customer...\n",
        );
    Ok(())
}

#[test]
fn run_selection_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    bin()
        .arg("run")
        .env("WORKFLOW_FACTORY_WORKFLOWS", "custom,order")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Executing Custom Workflow:"))
        .stdout(predicate::str::contains("Invoice").not());
    Ok(())
}

#[test]
fn run_unknown_workflow_is_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    bin()
        .args(["run", "--workflow", "payroll"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("payroll"));
    Ok(())
}

#[test]
fn quiet_suppresses_output() -> Result<(), Box<dyn std::error::Error>> {
    bin().arg("--quiet").assert().success().stdout("");
    Ok(())
}

#[test]
fn verbose_adds_step_summaries() -> Result<(), Box<dyn std::error::Error>> {
    bin()
        .args(["--verbose", "run", "-w", "order"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ validate_order ("))
        .stdout(predicate::str::contains("✓ Order Processing Workflow complete"));
    Ok(())
}

#[test]
fn list_shows_workflows() -> Result<(), Box<dyn std::error::Error>> {
    bin()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "order: validate_order → process_payment → ship_order",
        ))
        .stdout(predicate::str::contains("Invoice Processing Workflow"));
    Ok(())
}

#[test]
fn list_json_is_valid() -> Result<(), Box<dyn std::error::Error>> {
    let output = bin().args(["list", "--json"]).output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let names: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["order", "invoice", "custom"]);
    Ok(())
}

#[test]
fn list_json_ignores_quiet() -> Result<(), Box<dyn std::error::Error>> {
    let output = bin().args(["--quiet", "list", "--json"]).output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value.as_array().map(Vec::len), Some(3));
    assert_eq!(value[2]["title"], "Custom Workflow");
    Ok(())
}

#[test]
fn debug_logs_go_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    bin()
        .args(["--debug", "run", "-w", "custom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Executing Custom Workflow:"))
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("notify_customer"));
    Ok(())
}

#[test]
fn shows_help() -> Result<(), Box<dyn std::error::Error>> {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("step by step"));
    Ok(())
}

#[test]
fn shows_version() -> Result<(), Box<dyn std::error::Error>> {
    bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn completions_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    bin()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("workflow-factory"));
    Ok(())
}
