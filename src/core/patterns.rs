//! Pattern definitions for the quantum-readiness scanner
//!
//! This module contains the fixed table of regex rules used to detect
//! quantum-vulnerable cryptographic primitives in raw source text, and the
//! narrower per-category rules used to locate a representative source line.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

/// Severity of a finding, a static property of its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "MEDIUM")]
    Medium,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
        }
    }

    /// Risk score deduction applied per finding of this severity.
    pub fn deduction(&self) -> u32 {
        match self {
            Severity::High => 30,
            Severity::Medium => 15,
        }
    }
}

/// The closed set of cryptographic primitive classes the scanner recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Category {
    #[serde(rename = "RSA")]
    Rsa,
    #[serde(rename = "ECDSA")]
    Ecdsa,
    #[serde(rename = "AES-128")]
    Aes128,
    #[serde(rename = "DSA")]
    Dsa,
    #[serde(rename = "Diffie-Hellman")]
    DiffieHellman,
}

impl Category {
    /// Fixed order in which categories are checked per file. Finding order in
    /// reports follows this order.
    pub const SCAN_ORDER: [Category; 5] = [
        Category::Rsa,
        Category::Ecdsa,
        Category::Aes128,
        Category::Dsa,
        Category::DiffieHellman,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Rsa => "RSA",
            Category::Ecdsa => "ECDSA",
            Category::Aes128 => "AES-128",
            Category::Dsa => "DSA",
            Category::DiffieHellman => "Diffie-Hellman",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Category::Aes128 => Severity::Medium,
            _ => Severity::High,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Category::Rsa => "RSA encryption detected - vulnerable to Shor's algorithm",
            Category::Ecdsa => "ECDSA signatures detected - vulnerable to Shor's algorithm",
            Category::Aes128 => {
                "AES-128 detected - Grover's algorithm reduces effective security to 64 bits"
            }
            Category::Dsa => "DSA signatures detected - vulnerable to Shor's algorithm",
            Category::DiffieHellman => {
                "Diffie-Hellman key exchange detected - vulnerable to Shor's algorithm"
            }
        }
    }

    /// Suggested post-quantum replacement for this primitive.
    pub fn replacement(&self) -> &'static str {
        match self {
            Category::Rsa => "Replace with ML-KEM (CRYSTALS-Kyber) for key encapsulation",
            Category::Ecdsa => "Replace with ML-DSA (CRYSTALS-Dilithium) or SLH-DSA (SPHINCS+)",
            Category::Aes128 => "Upgrade to AES-256 for 128-bit post-quantum security",
            Category::Dsa => "Replace with ML-DSA (CRYSTALS-Dilithium)",
            Category::DiffieHellman => "Replace with ML-KEM (CRYSTALS-Kyber) key encapsulation",
        }
    }

    /// Broad detection rules, evaluated against the whole file text with OR
    /// semantics. Case-insensitive by construction.
    ///
    /// The Ed25519/Ed448/Curve25519/Curve448 rules under ECDSA are
    /// intentionally overbroad and part of the documented classification
    /// contract.
    fn detection_rules(&self) -> &'static [&'static str] {
        match self {
            Category::Rsa => &[
                r"(?i)rsa",
                r"(?i)(?:modulus_?length|key_?size)\s*[:=]\s*(?:1024|2048|4096)",
                r#"(?i)generateKeyPair(?:Sync)?\s*\(\s*['"]rsa['"]"#,
                r"(?i)publicEncrypt\s*\(|privateDecrypt\s*\(",
                r"(?i)forge\.rsa|node-rsa|jsrsasign",
            ],
            Category::Ecdsa => &[
                r"(?i)ecdsa",
                r"(?i)elliptic\s+curve",
                r#"(?i)createSign\s*\(\s*['"]sha"#,
                r#"(?i)createVerify\s*\(\s*['"]sha"#,
                r"(?i)secp256k1|secp384r1|prime256v1",
                r"(?i)ed25519|ed448|curve25519|curve448",
            ],
            Category::Aes128 => &[
                r"(?i)aes-128|aes_128|aes128",
                r#"(?i)createCipheriv\s*\(\s*['"]aes-128"#,
            ],
            Category::Dsa => &[
                // Word-bounded so that ECDSA does not also register as DSA.
                r"(?i)\bdsa\b",
                r#"(?i)createSign\s*\(\s*['"]dsa"#,
            ],
            Category::DiffieHellman => &[
                r"(?i)diffie[\s_-]?hellman",
                r"(?i)createDiffieHellman\s*\(",
                r"(?i)createECDH\s*\(",
                r#"(?i)key_?exchange['"]?\s*[:=]\s*['"](?:ecdh|ecdsa)"#,
            ],
        }
    }

    /// Narrower rule used to locate a representative line. May find nothing
    /// even when a broad detection rule matched (e.g. detection hit a library
    /// call name this rule does not cover); that is reported as "no line",
    /// not an error.
    fn line_rule(&self) -> &'static str {
        match self {
            Category::Rsa => r"(?i)rsa|modulus_?length",
            Category::Ecdsa => {
                r"(?i)ecdsa|elliptic|secp256k1|secp384r1|prime256v1|ed25519|ed448|curve25519|curve448"
            }
            Category::Aes128 => r"(?i)aes[-_]?128",
            Category::Dsa => r"(?i)\bdsa\b",
            Category::DiffieHellman => r"(?i)diffie|ecdh",
        }
    }
}

/// One positive classifier result for a file's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub category: Category,
    /// 1-based first matching line, or None when the line-locating rule did
    /// not fire despite the broad rule matching.
    pub line: Option<usize>,
}

/// A category's rules, compiled once.
struct CompiledCategory {
    category: Category,
    detection: Vec<Regex>,
    line: Regex,
}

/// Helper function to compile a single pattern
fn compile_pattern(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            log::error!("Error compiling pattern {}: {}", pattern, e);
            None
        }
    }
}

fn compile_table() -> Vec<CompiledCategory> {
    Category::SCAN_ORDER
        .iter()
        .filter_map(|&category| {
            let detection: Vec<Regex> = category
                .detection_rules()
                .iter()
                .filter_map(|p| compile_pattern(p))
                .collect();
            let line = compile_pattern(category.line_rule())?;
            Some(CompiledCategory {
                category,
                detection,
                line,
            })
        })
        .collect()
}

lazy_static! {
    /// Precompiled pattern table, shared read-only across all scans
    static ref COMPILED_TABLE: Vec<CompiledCategory> = compile_table();
}

/// Check whether any of a category's broad rules match the text.
pub fn category_matches(category: Category, text: &str) -> bool {
    COMPILED_TABLE
        .iter()
        .find(|c| c.category == category)
        .map(|c| c.detection.iter().any(|re| re.is_match(text)))
        .unwrap_or(false)
}

/// Find the 1-based index of the first line matching the category's
/// line-locating rule.
pub fn locate_line(category: Category, text: &str) -> Option<usize> {
    let compiled = COMPILED_TABLE.iter().find(|c| c.category == category)?;
    text.lines()
        .position(|line| compiled.line.is_match(line))
        .map(|idx| idx + 1)
}

/// Run all five categories against the text, in scan order.
///
/// Pure function of the text: no I/O, no shared mutable state.
pub fn classify(text: &str) -> Vec<Detection> {
    COMPILED_TABLE
        .iter()
        .filter(|c| c.detection.iter().any(|re| re.is_match(text)))
        .map(|c| Detection {
            category: c.category,
            line: text
                .lines()
                .position(|line| c.line.is_match(line))
                .map(|idx| idx + 1),
        })
        .collect()
}
