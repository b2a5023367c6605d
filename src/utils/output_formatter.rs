//! Output formatter for scan reports
//!
//! This module renders file and project reports for the terminal and exports
//! them as JSON. Rendering is a pure function of the report value; the only
//! ambient state is the global color toggle owned by the `colored` crate.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::core::algorithms::{AlgorithmVerdict, Safety};
use crate::core::patterns::Severity;
use crate::core::scanner::{FileReport, ProjectReport, RISK_THRESHOLD};

fn severity_label(severity: Severity) -> ColoredString {
    match severity {
        Severity::High => severity.as_str().red().bold(),
        Severity::Medium => severity.as_str().yellow().bold(),
    }
}

fn score_label(score: u8) -> ColoredString {
    let text = format!("{}/100", score);
    if score >= 80 {
        text.green().bold()
    } else if score >= RISK_THRESHOLD {
        text.yellow().bold()
    } else {
        text.red().bold()
    }
}

/// Format a single-file report for console output.
pub fn format_file_report(report: &FileReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} {}\n", "File:".cyan().bold(), report.file));

    if let Some(error) = &report.error {
        output.push_str(&format!("  {} {}\n", "Error:".red().bold(), error));
        output.push_str(&format!("  {} {}\n", "Risk score:".bold(), score_label(report.risk_score)));
        return output;
    }

    if report.vulnerabilities.is_empty() {
        output.push_str(&format!("  {}\n", "No quantum-vulnerable primitives detected.".green()));
    } else {
        for finding in &report.vulnerabilities {
            let location = match finding.line {
                Some(line) => format!("line {}", line),
                None => "line n/a".to_string(),
            };
            output.push_str(&format!(
                "  [{}] {} ({})\n",
                severity_label(finding.severity),
                finding.category.name().bold(),
                location
            ));
            output.push_str(&format!("      {}\n", finding.message));
            output.push_str(&format!("      {} {}\n", "Fix:".cyan(), finding.fix));
        }
    }

    output.push_str(&format!("  {} {}\n", "Risk score:".bold(), score_label(report.risk_score)));
    output
}

/// Format a project report for console output.
pub fn format_project_report(report: &ProjectReport, summary_only: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", "Quantum Readiness Audit".yellow().bold()));
    output.push_str(&format!("Scanned at: {}\n\n", report.scanned));

    if !summary_only {
        for file in &report.files {
            if file.is_vulnerable() || file.error.is_some() {
                output.push_str(&format_file_report(file));
                output.push('\n');
            }
        }
    }

    output.push_str(&format!("{}\n", "Summary".cyan().bold()));
    output.push_str(&format!("  Files scanned:         {}\n", report.summary.total_files));
    output.push_str(&format!("  Vulnerable files:      {}\n", report.summary.vulnerable_files));
    output.push_str(&format!("  Total vulnerabilities: {}\n", report.summary.total_vulnerabilities));

    if !report.summary.by_type.is_empty() {
        output.push_str(&format!("  {}\n", "By category:".bold()));
        for (category, count) in &report.summary.by_type {
            output.push_str(&format!("    {}: {}\n", category, count));
        }
    }

    if let Some(error) = &report.error {
        output.push_str(&format!("  {} {}\n", "Enumeration error:".red().bold(), error));
    }

    output.push_str(&format!("\n{} {}\n", "Project risk score:".bold(), score_label(report.risk_score)));
    output
}

/// Format an algorithm verdict for console output.
///
/// A `None` verdict is rendered as an explicit "no information" line.
pub fn format_algorithm_verdict(name: &str, verdict: Option<&AlgorithmVerdict>) -> String {
    let Some(verdict) = verdict else {
        return format!(
            "{} no information available for '{}'\n",
            "Unknown algorithm:".yellow().bold(),
            name
        );
    };

    let mut output = String::new();
    let status = match verdict.safe {
        Safety::Safe => "quantum-safe".green().bold(),
        Safety::Partial => "partially quantum-safe".yellow().bold(),
        Safety::Unsafe => "NOT quantum-safe".red().bold(),
    };
    output.push_str(&format!("{}: {}\n", verdict.name.bold(), status));

    if let Some(note) = verdict.note {
        output.push_str(&format!("  Note: {}\n", note));
    }
    if let Some(replacement) = verdict.replacement {
        output.push_str(&format!("  {} {}\n", "Replacement:".cyan(), replacement));
    }

    output
}

/// Export a report to a JSON file.
pub fn export_report_json<T: Serialize>(report: &T, output_path: &Path) -> Result<()> {
    let file = File::create(output_path).context(format!(
        "Failed to create JSON output file: {}",
        output_path.display()
    ))?;

    serde_json::to_writer_pretty(file, report).context("Failed to write JSON data")?;

    Ok(())
}

/// Serialize a report as pretty-printed JSON for stdout.
pub fn render_json<T: Serialize>(report: &T) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report")
}
