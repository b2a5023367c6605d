//! Core scanner implementation
//!
//! This module drives the pattern classifier over a single file or a file
//! tree and folds the results into scored reports. Both operations are
//! single-pass, synchronous, and side-effect-free beyond reading files.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Utc;
use log::{info, warn};
use serde::Serialize;

use crate::core::patterns::{self, Category, Severity};
use crate::utils::file_utils;

/// Risk score threshold below which an audit is considered failing.
pub const RISK_THRESHOLD: u8 = 60;

/// The scan path supplied by the caller does not exist. This is the one
/// fatal precondition; everything else is recovered into report data.
#[derive(Debug, thiserror::Error)]
#[error("scan path does not exist: {path}")]
pub struct PathNotFound {
    pub path: String,
}

/// One detected issue instance. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    #[serde(rename = "type")]
    pub category: Category,
    pub severity: Severity,
    pub message: &'static str,
    pub fix: &'static str,
    /// 1-based line of the first match, or None when the line-locating rule
    /// found nothing despite detection matching.
    pub line: Option<usize>,
}

impl Finding {
    fn from_detection(detection: patterns::Detection) -> Self {
        let category = detection.category;
        Finding {
            category,
            severity: category.severity(),
            message: category.message(),
            fix: category.replacement(),
            line: detection.line,
        }
    }
}

/// Outcome of scanning one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub file: String,
    pub vulnerabilities: Vec<Finding>,
    pub risk_score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    pub fn is_vulnerable(&self) -> bool {
        !self.vulnerabilities.is_empty()
    }
}

/// Aggregated totals for a project scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_files: usize,
    pub vulnerable_files: usize,
    pub total_vulnerabilities: usize,
    /// Category occurrence counts; a category counts once per file in which
    /// it appears.
    pub by_type: BTreeMap<String, usize>,
}

impl Summary {
    fn new() -> Self {
        Summary {
            total_files: 0,
            vulnerable_files: 0,
            total_vulnerabilities: 0,
            by_type: BTreeMap::new(),
        }
    }
}

/// Outcome of scanning a directory tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReport {
    pub scanned: String,
    pub files: Vec<FileReport>,
    pub summary: Summary,
    pub risk_score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Compute the risk score for a set of findings.
///
/// Starts at 100, subtracts the per-severity deduction for each finding, and
/// clamps to [0, 100]. Only the count of findings matters, never the number
/// of affected lines.
pub fn compute_score(findings: &[Finding]) -> u8 {
    let deduction: u32 = findings.iter().map(|f| f.severity.deduction()).sum();
    100u32.saturating_sub(deduction) as u8
}

/// Scan a single file and produce a scored report.
///
/// Read failures are recovered locally: the returned report carries the
/// error message, no findings, and score 0. Callers always receive a report,
/// never an unwound error.
pub fn scan_file(path: &Path) -> FileReport {
    let file = path.to_string_lossy().to_string();
    info!("Scanning file: {}", file);

    let text = match file_utils::read_file_content(path) {
        Ok(text) => text,
        Err(e) => {
            warn!("Could not read {}: {}", file, e);
            return FileReport {
                file,
                vulnerabilities: Vec::new(),
                risk_score: 0,
                error: Some(e.to_string()),
            };
        }
    };

    let vulnerabilities: Vec<Finding> = patterns::classify(&text)
        .into_iter()
        .map(Finding::from_detection)
        .collect();
    let risk_score = compute_score(&vulnerabilities);

    FileReport {
        file,
        vulnerabilities,
        risk_score,
        error: None,
    }
}

/// Scan a directory tree and fold per-file reports into a project report.
///
/// Enumeration failures surface in the report's `error` field alongside the
/// partial summary accumulated before the failure.
pub fn scan_project(root: &Path) -> ProjectReport {
    let scanned = Utc::now().to_rfc3339();
    info!("Scanning project: {}", root.display());

    let (paths, error) = file_utils::collect_source_files(root);

    let mut files = Vec::with_capacity(paths.len());
    let mut summary = Summary::new();
    let mut risk_score: u8 = 100;

    for path in paths {
        let report = scan_file(&path);

        summary.total_files += 1;
        if report.is_vulnerable() {
            summary.vulnerable_files += 1;
        }
        summary.total_vulnerabilities += report.vulnerabilities.len();
        for finding in &report.vulnerabilities {
            *summary
                .by_type
                .entry(finding.category.name().to_string())
                .or_insert(0) += 1;
        }

        risk_score = risk_score.min(report.risk_score);
        files.push(report);
    }

    info!(
        "Project scan complete: {} files, {} vulnerable, score {}",
        summary.total_files, summary.vulnerable_files, risk_score
    );

    ProjectReport {
        scanned,
        files,
        summary,
        risk_score,
        error,
    }
}
