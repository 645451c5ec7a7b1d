//! End-to-end tests for the nsalias binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("nsalias.json");
    fs::write(&path, json).unwrap();
    path
}

fn nsalias() -> Command {
    let mut cmd = Command::cargo_bin("nsalias").unwrap();
    cmd.env_remove("NSALIAS_CONFIG");
    cmd
}

#[test]
fn test_expand_with_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(&temp_dir, r#"{ "namespaces": { "foo": "../bar" } }"#);

    nsalias()
        .args(["expand", "<foo>/somepath", "--from", "./projectPath/fizz/buzz"])
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout("..\\..\\..\\..\\bar\\somepath\n");
}

#[test]
fn test_expand_uses_separator_from_file() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir,
        r#"{ "namespaces": { "foo": "./bar" }, "separator": "slash" }"#,
    );

    nsalias()
        .current_dir(temp_dir.path())
        .args(["expand", "<foo>/somepath", "--from", "./projectPath"])
        .assert()
        .success()
        .stdout("../bar/somepath\n");
}

#[test]
fn test_separator_flag_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(
        &temp_dir,
        r#"{ "namespaces": { "foo": "./bar" }, "separator": "slash" }"#,
    );

    nsalias()
        .args(["expand", "<foo>/x", "--separator", "backslash", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout("bar\\x\n");
}

#[test]
fn test_plain_reference_is_echoed() {
    let temp_dir = TempDir::new().unwrap();

    nsalias()
        .current_dir(temp_dir.path())
        .args(["expand", "./plain/path"])
        .assert()
        .success()
        .stdout("./plain/path\n");
}

#[test]
fn test_undefined_namespace_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(&temp_dir, r#"{ "namespaces": {} }"#);

    nsalias()
        .args(["expand", "<foo>/somepath", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("namespace <foo> is not defined."));
}

#[test]
fn test_list_prints_sorted_namespaces() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(
        &temp_dir,
        r#"{ "namespaces": { "zeta": "./z", "alpha": "../a" } }"#,
    );

    nsalias()
        .arg("list")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout("<alpha> -> ../a\n<zeta> -> ./z\n");
}

#[test]
fn test_check_reports_invalid_names() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(&temp_dir, r#"{ "namespaces": { "bad name": "./x" } }"#);

    nsalias()
        .arg("check")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid namespace name 'bad name'"));
}

#[test]
fn test_check_counts_namespaces() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(&temp_dir, r#"{ "namespaces": { "a": "./a", "b": "./b" } }"#);

    nsalias()
        .arg("check")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 namespaces OK"));
}

#[test]
fn test_list_as_json() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(&temp_dir, r#"{ "namespaces": { "foo": "./bar" } }"#);

    let output = nsalias()
        .args(["list", "--json", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["namespaces"]["foo"], "./bar");
}
