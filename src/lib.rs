//! pqscan - a post-quantum readiness scanner
//!
//! This library scans JavaScript/TypeScript source text for lexical
//! indicators of quantum-vulnerable cryptographic primitives (RSA, ECDSA,
//! DSA, Diffie-Hellman, AES-128) and aggregates findings into per-file and
//! per-project risk reports.
//!
//! It is a heuristic, single-pass text classifier: matches in comments,
//! string literals, and identifier names all count, by design.

pub mod core;
pub mod utils;

// Re-export the main scanner types for convenience
pub use crate::core::algorithms::{check_algorithm, AlgorithmVerdict, Safety};
pub use crate::core::patterns::{Category, Severity};
pub use crate::core::scanner::{
    scan_file, scan_project, FileReport, Finding, ProjectReport, Summary, RISK_THRESHOLD,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
