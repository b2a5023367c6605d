//! pqscan - audit JavaScript/TypeScript projects for quantum-vulnerable
//! cryptography
//!
//! The main entry point. Parses command-line arguments, configures logging,
//! runs the requested scan or lookup, and maps the resulting risk score to
//! the process exit code.

use std::fs::File;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;

use pqscan::core::algorithms;
use pqscan::core::scanner::{self, PathNotFound, RISK_THRESHOLD};
use pqscan::utils::output_formatter;

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "pqscan",
    version,
    about = "Audit JavaScript/TypeScript projects for quantum-vulnerable cryptography",
    long_about = "pqscan statically scans source files for lexical indicators of \
cryptographic primitives that are weak against quantum adversaries (RSA, ECDSA, \
DSA, Diffie-Hellman, AES-128) and reports a risk score per file and per project.

The exit code is 0 for a passing audit and 1 when the risk score falls below 60 \
or the scan path does not exist."
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Set logging level (default: WARN)
    #[arg(long = "log-level", global = true, default_value = "warn")]
    log_level: LevelFilter,

    /// Log file path (logs to stderr when omitted)
    #[arg(long = "log-file", global = true)]
    log_file: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan a source file or a project directory
    Scan {
        /// File or directory to scan
        path: PathBuf,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Export the report to a JSON file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Suppress terminal output
        #[arg(long)]
        quiet: bool,

        /// Show only summary information for project scans
        #[arg(long = "summary-only")]
        summary_only: bool,
    },

    /// Look up the quantum-safety verdict for an algorithm name
    Check {
        /// Algorithm name, e.g. "RSA" or "AES-256"
        algorithm: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(&args);

    match args.command {
        Command::Scan {
            path,
            json,
            output,
            quiet,
            summary_only,
        } => run_scan(path, json, output, quiet, summary_only),
        Command::Check { algorithm } => {
            let verdict = algorithms::check_algorithm(&algorithm);
            print!(
                "{}",
                output_formatter::format_algorithm_verdict(&algorithm, verdict)
            );
            Ok(())
        }
    }
}

/// Set up logging with the configured level and target
fn setup_logging(args: &Args) {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(args.log_level);

    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(log_file) = &args.log_file {
        if let Ok(file) = File::create(log_file) {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }

    let _ = builder.try_init();
}

/// Run a scan over a file or directory and exit per the audit convention.
fn run_scan(
    path: PathBuf,
    json: bool,
    output: Option<PathBuf>,
    quiet: bool,
    summary_only: bool,
) -> Result<()> {
    // The one fatal precondition: nothing to scan at all.
    if !path.exists() {
        let err = PathNotFound {
            path: path.display().to_string(),
        };
        eprintln!("{} {}", "Error:".red().bold(), err);
        process::exit(1);
    }

    let risk_score = if path.is_file() {
        let report = scanner::scan_file(&path);

        if let Some(output_path) = &output {
            output_formatter::export_report_json(&report, output_path)?;
        }
        if json {
            println!("{}", output_formatter::render_json(&report)?);
        } else if !quiet {
            print!("{}", output_formatter::format_file_report(&report));
        }

        report.risk_score
    } else {
        let spinner = if !quiet && !json {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap(),
            );
            pb.set_message(format!("Scanning {}...", path.display()));
            pb.enable_steady_tick(Duration::from_millis(100));
            Some(pb)
        } else {
            None
        };

        let report = scanner::scan_project(&path);

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        if let Some(output_path) = &output {
            output_formatter::export_report_json(&report, output_path)?;
        }
        if json {
            println!("{}", output_formatter::render_json(&report)?);
        } else if !quiet {
            print!(
                "{}",
                output_formatter::format_project_report(&report, summary_only)
            );
        }

        report.risk_score
    };

    if risk_score < RISK_THRESHOLD {
        process::exit(1);
    }

    Ok(())
}
