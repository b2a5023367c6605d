//! Integration tests for the quantum-readiness scanner
//!
//! These tests exercise file and project scans end to end, including tree
//! filtering, scoring, and the serialized report shape.

use std::fs;
use std::path::Path;

use pqscan::core::patterns::{Category, Severity};
use pqscan::core::scanner::{scan_file, scan_project};

#[test]
fn test_fixture_detects_all_categories() {
    let report = scan_file(Path::new("tests/test_data.js"));
    assert!(report.error.is_none());

    let categories: Vec<Category> = report
        .vulnerabilities
        .iter()
        .map(|f| f.category)
        .collect();
    assert_eq!(
        categories,
        vec![
            Category::Rsa,
            Category::Ecdsa,
            Category::Aes128,
            Category::Dsa,
            Category::DiffieHellman,
        ]
    );

    // 4 HIGH + 1 MEDIUM deducts 135; the score clamps at 0.
    assert_eq!(report.risk_score, 0);

    for finding in &report.vulnerabilities {
        assert!(
            finding.line.is_some(),
            "fixture should yield a line for {}",
            finding.category.name()
        );
    }
    assert_eq!(report.vulnerabilities[2].severity, Severity::Medium);
}

#[test]
fn test_tree_scan_filters_and_scores() {
    let dir = tempfile::tempdir().expect("temp dir");
    let src = dir.path().join("src");
    fs::create_dir_all(&src).expect("create src");

    fs::write(
        src.join("crypto.js"),
        "const cipher = createCipheriv('aes-128-gcm', key, iv); // rotate RSA keys\n",
    )
    .expect("write crypto.js");
    fs::write(src.join("clean.js"), "export function add(a, b) { return a + b; }\n")
        .expect("write clean.js");

    // Ignored directories are never descended, at any depth.
    let vendored = src.join("node_modules").join("lib");
    fs::create_dir_all(&vendored).expect("create node_modules");
    fs::write(vendored.join("evil.js"), "const rsa = 1;").expect("write evil.js");
    let git = dir.path().join(".git");
    fs::create_dir_all(&git).expect("create .git");
    fs::write(git.join("hooks.js"), "createDiffieHellman()").expect("write hooks.js");

    // Non-source extension, never included by tree traversal.
    fs::write(dir.path().join("notes.txt"), "RSA 2048 migration notes\n").expect("write notes");

    let report = scan_project(dir.path());
    assert!(report.error.is_none());
    assert_eq!(report.summary.total_files, 2);
    assert_eq!(report.summary.vulnerable_files, 1);
    assert_eq!(report.summary.total_vulnerabilities, 2);
    assert_eq!(report.summary.by_type.get("RSA"), Some(&1));
    assert_eq!(report.summary.by_type.get("AES-128"), Some(&1));
    assert_eq!(report.summary.by_type.get("Diffie-Hellman"), None);

    // RSA (HIGH) + AES-128 (MEDIUM) in one file.
    assert_eq!(report.risk_score, 55);
    let min_file_score = report.files.iter().map(|f| f.risk_score).min().unwrap();
    assert!(report.risk_score <= min_file_score);
}

#[test]
fn test_non_source_file_scanned_when_passed_directly() {
    let dir = tempfile::tempdir().expect("temp dir");
    let notes = dir.path().join("notes.txt");
    fs::write(&notes, "RSA 2048 migration notes\n").expect("write");

    let report = scan_file(&notes);
    assert_eq!(report.vulnerabilities.len(), 1);
    assert_eq!(report.vulnerabilities[0].category, Category::Rsa);
    assert_eq!(report.risk_score, 70);
}

#[test]
fn test_project_with_no_source_files_scores_100() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("README.md"), "# docs\n").expect("write");

    let report = scan_project(dir.path());
    assert_eq!(report.summary.total_files, 0);
    assert_eq!(report.risk_score, 100);
}

#[test]
fn test_project_scan_is_idempotent() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("app.ts"), "const signer = createSign('SHA384'); // ECDSA\n")
        .expect("write");

    let first = scan_project(dir.path());
    let second = scan_project(dir.path());

    // Timestamps differ between runs; everything derived from the tree
    // must not.
    assert_eq!(first.files, second.files);
    assert_eq!(first.summary, second.summary);
    assert_eq!(first.risk_score, second.risk_score);
}

#[test]
fn test_report_json_shape() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(
        dir.path().join("keys.js"),
        "const pair = generateKeyPairSync('rsa', { modulusLength: 4096 });\n",
    )
    .expect("write");

    let report = scan_project(dir.path());
    let json = serde_json::to_value(&report).expect("serialize");

    assert!(json["scanned"].is_string());
    assert_eq!(json["summary"]["totalFiles"], serde_json::json!(1));
    assert_eq!(json["summary"]["vulnerableFiles"], serde_json::json!(1));
    assert_eq!(json["summary"]["byType"]["RSA"], serde_json::json!(1));
    assert_eq!(json["riskScore"], serde_json::json!(70));

    let file = &json["files"][0];
    assert_eq!(file["riskScore"], serde_json::json!(70));
    assert_eq!(file["vulnerabilities"][0]["type"], serde_json::json!("RSA"));
    assert_eq!(file["vulnerabilities"][0]["severity"], serde_json::json!("HIGH"));
    assert!(file["vulnerabilities"][0]["fix"].is_string());
    // Clean reports omit the error field entirely.
    assert!(file.get("error").is_none());
}

#[test]
fn test_line_sentinel_survives_serialization() {
    let dir = tempfile::tempdir().expect("temp dir");
    // Detection matches on the call name; the line-locating rule does not
    // cover it, so the finding carries no line.
    fs::write(dir.path().join("opaque.js"), "crypto.publicEncrypt(key, buf);\n").expect("write");

    let report = scan_project(dir.path());
    assert_eq!(report.files.len(), 1);
    let finding = &report.files[0].vulnerabilities[0];
    assert_eq!(finding.category, Category::Rsa);
    assert_eq!(finding.line, None);

    let json = serde_json::to_value(&report.files[0]).expect("serialize");
    assert_eq!(json["vulnerabilities"][0]["line"], serde_json::Value::Null);
}
