//! Tests for fixture parsing and normalization

use std::path::Path;
use tagcheck_domain::value_objects::{ExternalValue, FixtureValue, TestFile};
use tagcheck_domain::Error;

const FIXTURE: &str = r#"[
    {
        "name": "bad_exe",
        "expects_match": ["flag_bad_exe"],
        "data": {
            "al_file_name": "bad.exe",
            "al_file_size": 1024,
            "al_network_static_domain": ["a.com", "b.com"]
        }
    },
    { "name": "bare" },
    { "name": "skipped", "skip": true, "expects_match": ["never"] }
]"#;

fn path() -> &'static Path {
    Path::new("tagcheck/tests/indicators.json")
}

#[test]
fn test_parse_fixture_document() {
    let file = TestFile::from_json(path(), FIXTURE).unwrap();
    assert_eq!(file.len(), 3);
    let names: Vec<_> = file.cases.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["bad_exe", "bare", "skipped"]);
}

#[test]
fn test_optional_fields_default() {
    let file = TestFile::from_json(path(), FIXTURE).unwrap();
    let bare = file.cases[1].parse().unwrap();
    assert!(bare.expects_match.is_empty());
    assert!(bare.expects_no_match.is_empty());
    assert!(bare.data.is_empty());
    assert!(!bare.skip);

    assert!(file.cases[2].parse().unwrap().skip);
}

#[test]
fn test_skip_is_read_without_validating_the_entry() {
    let json = r#"[
        {"name": "wip", "skip": true, "data": {"al_file_size": null}},
        {"name": "not_bool", "skip": "yes"},
        {"name": "default"}
    ]"#;
    let file = TestFile::from_json(path(), json).unwrap();

    assert!(file.cases[0].skip);
    assert!(file.cases[0].parse().is_err());
    assert!(!file.cases[1].skip);
    assert!(!file.cases[2].skip);
}

#[test]
fn test_list_values_are_joined() {
    let file = TestFile::from_json(path(), FIXTURE).unwrap();
    let case = file.cases[0].parse().unwrap();
    let data: std::collections::BTreeMap<_, _> =
        case.normalized_data(" | ").into_iter().collect();

    assert_eq!(
        data["al_network_static_domain"],
        ExternalValue::from("a.com | b.com")
    );
    assert_eq!(data["al_file_name"], ExternalValue::from("bad.exe"));
    assert_eq!(data["al_file_size"], ExternalValue::Integer(1024));
}

#[test]
fn test_normalize_uses_given_separator() {
    let value = FixtureValue::List(vec!["x".into(), "y".into(), "z".into()]);
    assert_eq!(value.normalize(","), ExternalValue::from("x,y,z"));
    assert_eq!(
        FixtureValue::List(Vec::new()).normalize(" | "),
        ExternalValue::from("")
    );
}

#[test]
fn test_malformed_json_is_fixture_error() {
    let err = TestFile::from_json(path(), "[{\"name\": ").unwrap_err();
    match err {
        Error::Fixture { path: p, message } => {
            assert_eq!(p, path());
            assert!(message.contains("malformed JSON"));
        }
        other => panic!("Expected Fixture error, got {other:?}"),
    }
}

#[test]
fn test_non_list_document_is_fixture_error() {
    let err = TestFile::from_json(path(), r#"{"name": "x"}"#).unwrap_err();
    assert!(err.to_string().contains("expected a list"));
}

#[test]
fn test_missing_name_is_fixture_error() {
    let err = TestFile::from_json(path(), r#"[{"name": "ok"}, {"skip": true}]"#).unwrap_err();
    assert!(err.to_string().contains("entry 1 has no string 'name' field"));
}

#[test]
fn test_bad_data_shape_fails_only_that_case() {
    let json = r#"[
        {"name": "float", "data": {"al_file_size": 1.5}},
        {"name": "fine", "data": {"al_file_size": 2}}
    ]"#;
    let file = TestFile::from_json(path(), json).unwrap();
    assert!(file.cases[0].parse().is_err());
    assert!(file.cases[1].parse().is_ok());
}

#[test]
fn test_empty_list_is_valid() {
    let file = TestFile::from_json(path(), "[]").unwrap();
    assert!(file.is_empty());
}
