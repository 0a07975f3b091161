//! Integration tests for the medref binary.
//!
//! These tests verify end-to-end behavior including:
//! - Database queries (search, filter, show)
//! - Module manifests
//! - Integrity checks and config handling
//! - Export to CSV and JSON

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a scratch directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
///
/// Every invocation gets its own config file so a developer's real config
/// never leaks into the tests.
fn cli(temp_dir: &TempDir) -> Command {
    let config_path = temp_dir.path().join("config.toml");
    if !config_path.exists() {
        fs::write(&config_path, "").expect("Failed to write config");
    }
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("medref"));
    cmd.arg("--config").arg(config_path);
    cmd
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}

#[test]
fn test_cli_help() {
    Command::new(assert_cmd::cargo::cargo_bin!("medref"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Medical education content reference"));
}

#[test]
fn test_show_chlamydia() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["show", "chlamydia"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chlamydia"))
        .stdout(predicate::str::contains("sti-bacterial"));
}

#[test]
fn test_show_unknown_id_fails() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["show", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn test_show_module_level_json() {
    let temp_dir = setup_test_dir();
    let output = cli(&temp_dir)
        .args(["show", "endometriosis", "--level", "3", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let level = stdout_json(&output);
    assert_eq!(level["level"], 3);
    assert!(level["keyTerms"].as_array().unwrap().len() >= 1);
}

#[test]
fn test_show_missing_level_fails() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["show", "endometriosis", "--level", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no level 5"));
}

#[test]
fn test_search_chancre_json() {
    let temp_dir = setup_test_dir();
    let output = cli(&temp_dir)
        .args(["search", "CHANCRE", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let ids: Vec<String> = stdout_json(&output)
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap().to_string())
        .collect();
    assert!(ids.contains(&"syphilis-primary".to_string()));
}

#[test]
fn test_search_with_modules() {
    let temp_dir = setup_test_dir();
    let output = cli(&temp_dir)
        .args(["search", "torsion", "--modules", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value = stdout_json(&output);
    let modules = value["modules"].as_array().unwrap();
    assert!(modules.iter().any(|m| m["id"] == "testicular-torsion"));
}

#[test]
fn test_search_no_matches() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["search", "zzzz-nothing-matches"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matches"));
}

#[test]
fn test_filter_hiv() {
    let temp_dir = setup_test_dir();
    let output = cli(&temp_dir)
        .args(["filter", "--category", "hiv", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let ids: Vec<String> = stdout_json(&output)
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        ids,
        vec![
            "hiv-acute-infection",
            "hiv-screening",
            "hiv-art-principles",
            "hiv-prep",
            "hiv-pep",
            "hiv-opportunistic-infections",
        ]
    );
}

#[test]
fn test_filter_rejects_unknown_category() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["filter", "--category", "cardiology"])
        .assert()
        .failure();
}

#[test]
fn test_filter_without_categories_is_empty() {
    let temp_dir = setup_test_dir();
    let output = cli(&temp_dir).args(["filter", "--json"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output).as_array().unwrap().len(), 0);
}

#[test]
fn test_manifest_reproductive() {
    let temp_dir = setup_test_dir();
    let output = cli(&temp_dir)
        .args(["manifest", "--family", "reproductive", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value = stdout_json(&output);
    assert_eq!(value["totalModules"], 23);
    assert_eq!(value["modules"].as_array().unwrap().len(), 23);
    assert_eq!(value["modules"][0], "female-reproductive-anatomy");
}

#[test]
fn test_manifest_lists_families() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("manifest")
        .assert()
        .success()
        .stdout(predicate::str::contains("reproductive"))
        .stdout(predicate::str::contains("clinical-reasoning"));
}

#[test]
fn test_manifest_unknown_family_fails() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["manifest", "--family", "dermatology"])
        .assert()
        .failure();
}

#[test]
fn test_check_shipped_corpus_is_clean() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Corpus is clean"))
        .stderr(predicate::str::contains("WARN").not());
}

#[test]
fn test_require_all_levels_blocks_commands() {
    let temp_dir = setup_test_dir();
    fs::write(
        temp_dir.path().join("config.toml"),
        "[integrity]\nrequire_all_levels = true\n",
    )
    .unwrap();

    cli(&temp_dir)
        .args(["show", "chlamydia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corpus integrity errors"));

    cli(&temp_dir)
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("level 2 is missing"));
}

#[test]
fn test_show_module_spanish_name() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["show", "endometriosis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("es: Endometriosis"))
        .stdout(predicate::str::contains("nameEs").not());
}

#[test]
fn test_search_modules_by_spanish_name() {
    let temp_dir = setup_test_dir();
    let output = cli(&temp_dir)
        .args(["search", "Embarazo", "--modules", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value = stdout_json(&output);
    let modules = value["modules"].as_array().unwrap();
    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0]["id"], "ectopic-pregnancy");
    assert_eq!(modules[0]["nameEs"], "Embarazo Ectópico");
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = setup_test_dir();
    fs::write(temp_dir.path().join("config.toml"), "[output]\nformat = \"yaml\"\n").unwrap();

    cli(&temp_dir).arg("manifest").assert().failure();
}

#[test]
fn test_config_json_output_format() {
    let temp_dir = setup_test_dir();
    fs::write(temp_dir.path().join("config.toml"), "[output]\nformat = \"json\"\n").unwrap();

    let output = cli(&temp_dir).arg("manifest").output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["reproductive"], 23);
}

#[test]
fn test_export_csv() {
    let temp_dir = setup_test_dir();
    let out = temp_dir.path().join("out").join("entries.csv");

    cli(&temp_dir)
        .args(["export", "--format", "csv", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 40 records"));

    let contents = fs::read_to_string(&out).unwrap();
    assert!(contents.starts_with("id,name,category"));
    assert_eq!(contents.lines().filter(|l| l.starts_with("chlamydia,")).count(), 1);
}

#[test]
fn test_export_json_to_configured_dir() {
    let temp_dir = setup_test_dir();
    let export_dir = temp_dir.path().join("exports");
    fs::write(
        temp_dir.path().join("config.toml"),
        format!("[export]\ndir = {:?}\n", export_dir.to_string_lossy()),
    )
    .unwrap();

    cli(&temp_dir)
        .args(["export", "--format", "json"])
        .assert()
        .success();

    let path = export_dir.join("medref-export.json");
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(value["entries"].as_array().unwrap().len(), 40);
}
