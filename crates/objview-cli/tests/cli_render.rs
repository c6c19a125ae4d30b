use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn fixture(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(json.as_bytes()).expect("failed to write fixture");
    file
}

fn objview() -> Command {
    Command::cargo_bin("objview").expect("binary should build")
}

const ARRAY_DOC: &str = r#"{
    "kind": "object",
    "subtype": "array",
    "description": "Array",
    "size": 5,
    "properties": [
        {"name": "0", "rawFormatted": "4"},
        {"name": "1", "rawFormatted": "5"},
        {"name": "2", "rawFormatted": "6"},
        {"name": "3", "rawFormatted": "7"},
        {"name": "4", "rawFormatted": "8"}
    ],
    "overflow": false,
    "lossless": true
}"#;

#[test]
fn test_render_full_mode() {
    let file = fixture(ARRAY_DOC);

    objview()
        .arg("render")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[4, 5, 6, 7, 8] (5)"));
}

#[test]
fn test_render_brief_mode_truncates_silently() {
    let file = fixture(ARRAY_DOC);

    objview()
        .arg("render")
        .arg(file.path())
        .args(["--mode", "brief"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[4, 5, 6] (5)"));
}

#[test]
fn test_render_title() {
    let file = fixture(ARRAY_DOC);

    objview()
        .arg("render")
        .arg(file.path())
        .arg("--title")
        .assert()
        .success()
        .stdout(predicate::str::contains("Array (5)"));
}

#[test]
fn test_check_lossless_document_passes() {
    let file = fixture(ARRAY_DOC);

    objview()
        .arg("check")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("lossless: true"));
}

#[test]
fn test_check_non_lossless_document_fails() {
    let file = fixture(
        r#"{
            "kind": "object",
            "subtype": "error",
            "description": "TypeError",
            "properties": [{"name": "message", "rawFormatted": "boom"}],
            "lossless": true
        }"#,
    );

    objview()
        .arg("check")
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("lossless: false"));
}

#[test]
fn test_malformed_document_reports_error() {
    let file = fixture(r#"{"kind": "object", "entries": [{}]}"#);

    objview()
        .arg("render")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed preview document"));
}

#[test]
fn test_missing_file_reports_error() {
    objview()
        .arg("render")
        .arg("/nonexistent/preview.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
