//! Tests for configuration overrides, execution and exit status

use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use tagcheck::app::{self, EXIT_FAILED, EXIT_PASSED};
use tagcheck::domain::value_objects::RunSummary;
use tagcheck::{Error, Outcome, RunOptions};
use tempfile::TempDir;

const INDICATORS: &str = r#"
rule flag_bad_exe {
    condition:
        al_file_name == "bad.exe"
}
"#;

fn write(temp: &TempDir, relative: &str, content: &str) -> PathBuf {
    let path = temp.path().join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

/// Options pointing at an explicit (possibly empty) config file so the
/// working directory's `tagcheck.toml` never leaks in
fn options(temp: &TempDir, config: &str) -> RunOptions {
    RunOptions {
        config_path: Some(write(temp, "config/tagcheck.toml", config)),
        rules_dir: Some(temp.path().join("rules")),
        no_color: true,
        ..RunOptions::default()
    }
}

fn run_to_string(options: &RunOptions) -> (Outcome, String) {
    let config = app::load_config(options).unwrap();
    let mut out = Vec::new();
    let outcome = app::execute(options, &config, &mut out).unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

#[test]
fn test_color_enabled() {
    assert!(app::color_enabled(true, false, None));
    assert!(app::color_enabled(true, false, Some(OsStr::new(""))));
    assert!(!app::color_enabled(true, false, Some(OsStr::new("1"))));
    assert!(!app::color_enabled(true, true, None));
    assert!(!app::color_enabled(false, false, None));
}

#[test]
fn test_exit_status() {
    let passed = RunSummary {
        total_files: 2,
        failed_files: 0,
    };
    let failed = RunSummary {
        total_files: 2,
        failed_files: 1,
    };

    assert_eq!(Outcome::Listed.exit_status(), EXIT_PASSED);
    assert_eq!(Outcome::Tested(passed).exit_status(), EXIT_PASSED);
    assert_eq!(Outcome::Tested(failed).exit_status(), EXIT_FAILED);
}

#[test]
fn test_cli_overrides_config() {
    let temp = TempDir::new().unwrap();
    let options = options(
        &temp,
        "[harness]\nrules_dir = \"elsewhere\"\n\n[output]\ncolor = true\n",
    );

    let config = app::load_config(&options).unwrap();
    assert_eq!(config.harness.rules_dir, temp.path().join("rules"));
    assert!(!config.output.color);
}

#[test]
fn test_missing_config_file_is_error() {
    let temp = TempDir::new().unwrap();
    let options = RunOptions {
        config_path: Some(temp.path().join("absent.toml")),
        ..RunOptions::default()
    };

    let err = app::load_config(&options).unwrap_err();
    assert!(format!("{err:#}").contains("Configuration file not found"));
}

#[test]
fn test_empty_rules_dir_passes() {
    let temp = TempDir::new().unwrap();
    let (outcome, text) = run_to_string(&options(&temp, ""));

    assert_eq!(text, "Total: 0 files, 0 failed\n");
    assert_eq!(outcome.exit_status(), EXIT_PASSED);
}

#[test]
fn test_failing_file_sets_exit_status() {
    let temp = TempDir::new().unwrap();
    write(&temp, "rules/indicators.rules", INDICATORS);
    write(
        &temp,
        "rules/tests/indicators.json",
        r#"[{"name": "good_exe", "expects_match": ["flag_bad_exe"], "data": {"al_file_name": "good.exe"}}]"#,
    );

    let (outcome, text) = run_to_string(&options(&temp, ""));

    assert!(text.contains("FAIL: Some tests failed for"));
    assert!(text.contains("   [X] not matched flag_bad_exe in good_exe"));
    assert_eq!(outcome.exit_status(), EXIT_FAILED);
}

#[test]
fn test_unknown_file_is_run_error() {
    let temp = TempDir::new().unwrap();
    write(&temp, "rules/indicators.rules", INDICATORS);
    let options = RunOptions {
        file: Some("missing.rules".to_string()),
        ..options(&temp, "")
    };

    let config = app::load_config(&options).unwrap();
    let err = app::execute(&options, &config, &mut Vec::new()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::NotFound { .. })
    ));
}

#[test]
fn test_list_externals() {
    let temp = TempDir::new().unwrap();
    let options = RunOptions {
        list_externals: true,
        ..options(&temp, "[externals]\nextra_fields = [\"custom.field\"]\n")
    };

    let (outcome, text) = run_to_string(&options);

    assert_eq!(outcome, Outcome::Listed);
    assert!(text.contains("al_file_size = 0\n"));
    assert!(text.contains("al_file_name = \"\"\n"));
    assert!(text.contains("al_custom_field = \"\"\n"));
    assert!(!text.contains("Total:"));
}

#[test]
fn test_config_loader_reports_explicit_source() {
    let temp = TempDir::new().unwrap();
    let options = options(&temp, "");

    let loader = app::config_loader(&options);
    assert_eq!(loader.source_path(), options.config_path);
}
