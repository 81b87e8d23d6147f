//! Integration tests for CLI functionality

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

/// Command for the compiled binary, isolated from the caller's TFE settings
fn tfe() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tfe"));
    for var in ["TFE_ORG", "TFE_HOSTNAME", "TFE_LOG_LEVEL", "TFE_TOKEN", "TFC_TOKEN", "HCP_TOKEN"] {
        cmd.env_remove(var);
    }
    cmd
}

fn var_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_help_flag() {
    tfe()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Manage TFE from the command line"))
        .stdout(predicate::str::contains("workspace"))
        .stdout(predicate::str::contains("variable"))
        .stdout(predicate::str::contains("notification"));
}

#[test]
fn test_version_flag() {
    tfe()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("tfe "));
}

#[test]
fn test_invalid_format() {
    tfe()
        .args(["workspace", "list", "--format", "invalid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid"));
}

#[test]
fn test_workspace_list_without_organization() {
    tfe()
        .args(["-t", "dummy-token", "workspace", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no organization specified"));
}

#[test]
fn test_variable_parse_structured() {
    let file = var_file(
        r#"stringvar = "expectedValue"
listvar = ["item1", "item2"]
mapvar = {
  key1 = "value1"
  key2 = {
    key21 = "value21"
  }
}
count = 3
"#,
    );

    tfe()
        .args(["variable", "parse"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"stringvar="expectedValue""#))
        .stdout(predicate::str::contains(r#"listvar=["item1", "item2"]"#))
        .stdout(predicate::str::contains(
            r#"mapvar={key1="value1",key2={key21="value21",},}"#,
        ))
        .stdout(predicate::str::contains("count=3"));
}

#[test]
fn test_variable_parse_raw() {
    let file = var_file("AWS_REGION = eu-west-1\nTF_LOG=debug\n");

    tfe()
        .args(["var", "parse", "--raw"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("AWS_REGION=eu-west-1\nTF_LOG=debug\n");
}

#[test]
fn test_variable_parse_needs_no_token() {
    let file = var_file("region = \"us-east-1\"\n");

    tfe()
        .env("HOME", "/nonexistent")
        .args(["variable", "parse"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("region=\"us-east-1\"\n");
}

#[test]
fn test_variable_parse_missing_file() {
    tfe()
        .args(["variable", "parse", "/nonexistent/vars.tfvars"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read the file"));
}

#[test]
fn test_variable_parse_malformed_hcl() {
    let file = var_file("broken = {\n");

    tfe()
        .args(["variable", "parse"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read the HCL content"));
}

#[test]
fn test_variable_create_rejects_invalid_token_before_api() {
    tfe()
        .args([
            "-o",
            "acme",
            "-t",
            "dummy-token",
            "-H",
            "127.0.0.1:1",
            "variable",
            "create",
            "app",
            "--var",
            "missing-equals",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid variable"));
}
