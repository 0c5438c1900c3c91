//! End-to-end runs over a rules tree with yara-x

use std::fs;
use std::sync::Arc;
use tagcheck_domain::value_objects::{ExternalVariableSet, ExternalsConfig, HarnessConfig};
use tagcheck_harness::{Reporter, RuleTester};
use tagcheck_infrastructure::adapters::YaraEngine;
use tempfile::TempDir;

const INDICATORS: &str = r#"
rule flag_bad_exe {
    meta:
        description = "Known bad file name"
        description = "Repeated metadata keys are accepted"
    condition:
        al_file_name == "bad.exe"
}
"#;

const INDICATORS_FIXTURE: &str = r#"[
    {"name": "bad_exe", "expects_match": ["flag_bad_exe"], "data": {"al_file_name": "bad.exe"}},
    {"name": "good_exe", "expects_no_match": ["flag_bad_exe"], "data": {"al_file_name": "good.exe"}}
]"#;

const DOMAINS: &str = r#"
rule both_domains {
    condition:
        al_network_static_domain == "a.com | b.com"
}
"#;

fn write(temp: &TempDir, relative: &str, content: &str) {
    let path = temp.path().join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn tester(temp: &TempDir) -> RuleTester {
    let config = HarnessConfig {
        rules_dir: temp.path().to_path_buf(),
        ..HarnessConfig::default()
    };
    let schema = ExternalVariableSet::from_config(&ExternalsConfig::default());
    RuleTester::new(Arc::new(YaraEngine::new()), &config, schema).unwrap()
}

#[test]
fn test_bad_and_good_exe() {
    let temp = TempDir::new().unwrap();
    write(&temp, "indicators.rules", INDICATORS);
    write(&temp, "tests/indicators.json", INDICATORS_FIXTURE);

    let results = tester(&temp).run(None).unwrap();
    let text = Reporter::new(false, false).to_text(&results);

    assert!(results[0].is_ok(), "{text}");
    assert!(text.contains("   [O] matched flag_bad_exe in bad_exe"));
    assert!(text.contains("   [O] not matched flag_bad_exe in good_exe"));
    assert!(text.ends_with("Total: 1 files, 0 failed\n"));
}

#[test]
fn test_list_data_joined() {
    let temp = TempDir::new().unwrap();
    write(&temp, "net/domains.rules", DOMAINS);
    write(
        &temp,
        "net/tests/domains.json",
        r#"[{"name": "pair", "expects_match": ["both_domains"],
             "data": {"al_network_static_domain": ["a.com", "b.com"]}}]"#,
    );

    let results = tester(&temp).run(None).unwrap();
    assert!(results[0].is_ok(), "{:?}", results[0]);
    assert_eq!(results[0].passed.len(), 1);
}

#[test]
fn test_empty_rules_dir() {
    let temp = TempDir::new().unwrap();

    let results = tester(&temp).run(None).unwrap();
    let mut out = Vec::new();
    let summary = Reporter::new(false, false)
        .write_results(&mut out, &results)
        .unwrap();

    assert!(summary.passed());
    assert_eq!(String::from_utf8(out).unwrap(), "Total: 0 files, 0 failed\n");
}

#[test]
fn test_compile_failures_counted_per_file() {
    let temp = TempDir::new().unwrap();
    write(&temp, "a/indicators.rules", INDICATORS);
    write(&temp, "b/broken.rules", "rule broken { condition: }");
    write(&temp, "c/undeclared.rules", "rule u { condition: al_not_a_field == \"x\" }");

    let results = tester(&temp).run(None).unwrap();
    let summary = Reporter::new(false, true)
        .write_results(&mut Vec::new(), &results)
        .unwrap();

    assert_eq!(summary.total_files, 3);
    assert_eq!(summary.failed_files, 2);
    assert!(!summary.passed());
}

#[test]
fn test_skip_and_missing_fixture() {
    let temp = TempDir::new().unwrap();
    write(&temp, "indicators.rules", INDICATORS);
    write(
        &temp,
        "tests/indicators.json",
        r#"[{"name": "pending", "expects_match": ["flag_bad_exe"], "skip": true}]"#,
    );
    write(&temp, "other/untested.rules", DOMAINS);

    let results = tester(&temp).run(None).unwrap();
    assert_eq!(results.len(), 2);
    for result in &results {
        assert!(result.is_ok());
        assert!(result.passed.is_empty());
    }

    let text = Reporter::new(false, false).to_text(&results);
    assert!(text.contains("[-] No tests found for"));
    assert!(text.ends_with("Total: 2 files, 0 failed\n"));
}

#[test]
fn test_single_file_selection() {
    let temp = TempDir::new().unwrap();
    write(&temp, "indicators.rules", INDICATORS);
    write(&temp, "tests/indicators.json", INDICATORS_FIXTURE);
    write(&temp, "b/broken.rules", "rule broken { condition: }");

    let results = tester(&temp).run(Some("indicators.rules")).unwrap();
    assert_eq!(results.len(), 1);
    assert!(results[0].is_ok());
}

#[test]
fn test_undeclared_data_key_and_skipped_bad_case() {
    let temp = TempDir::new().unwrap();
    write(&temp, "indicators.rules", INDICATORS);
    write(
        &temp,
        "tests/indicators.json",
        r#"[
            {"name": "extra", "expects_match": ["flag_bad_exe"],
             "data": {"al_file_name": "bad.exe", "al_unlisted_tag_field": "x"}},
            {"name": "wip", "expects_match": ["flag_bad_exe"],
             "data": {"al_file_size": null}, "skip": true}
        ]"#,
    );

    let results = tester(&temp).run(None).unwrap();

    assert!(results[0].is_ok(), "{:?}", results[0]);
    assert_eq!(results[0].passed.len(), 1);
    assert!(results[0].errors.is_empty());
}
