//! Static quantum-safety verdicts for named algorithms
//!
//! A fixed lookup table answering "is this algorithm quantum-safe" for nine
//! well-known primitives. Unknown names are an explicit "no information"
//! outcome, never an error.

use serde::ser::Serializer;
use serde::Serialize;

/// Quantum-safety classification of an algorithm.
///
/// Serializes as `true`, `false`, or `"partially"` to match the report
/// format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Safety {
    Safe,
    Unsafe,
    Partial,
}

impl Serialize for Safety {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Safety::Safe => serializer.serialize_bool(true),
            Safety::Unsafe => serializer.serialize_bool(false),
            Safety::Partial => serializer.serialize_str("partially"),
        }
    }
}

/// Hard-coded verdict for one named algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmVerdict {
    #[serde(skip)]
    pub name: &'static str,
    pub safe: Safety,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

/// The fixed verdict table. The set of names is closed; anything else is
/// reported as unknown.
pub const VERDICTS: [AlgorithmVerdict; 9] = [
    AlgorithmVerdict {
        name: "RSA",
        safe: Safety::Unsafe,
        replacement: Some("ML-KEM (CRYSTALS-Kyber)"),
        note: Some("Broken by Shor's algorithm on a large-scale quantum computer"),
    },
    AlgorithmVerdict {
        name: "ECDSA",
        safe: Safety::Unsafe,
        replacement: Some("ML-DSA (CRYSTALS-Dilithium)"),
        note: Some("Broken by Shor's algorithm on a large-scale quantum computer"),
    },
    AlgorithmVerdict {
        name: "DSA",
        safe: Safety::Unsafe,
        replacement: Some("ML-DSA (CRYSTALS-Dilithium)"),
        note: Some("Broken by Shor's algorithm on a large-scale quantum computer"),
    },
    AlgorithmVerdict {
        name: "Diffie-Hellman",
        safe: Safety::Unsafe,
        replacement: Some("ML-KEM (CRYSTALS-Kyber)"),
        note: Some("Broken by Shor's algorithm on a large-scale quantum computer"),
    },
    AlgorithmVerdict {
        name: "AES-128",
        safe: Safety::Partial,
        replacement: Some("AES-256"),
        note: Some("Grover's algorithm halves the effective key strength"),
    },
    AlgorithmVerdict {
        name: "AES-256",
        safe: Safety::Safe,
        replacement: None,
        note: Some("128-bit quantum security"),
    },
    AlgorithmVerdict {
        name: "SHA-256",
        safe: Safety::Safe,
        replacement: None,
        note: Some("128-bit quantum preimage resistance"),
    },
    AlgorithmVerdict {
        name: "SHA-3",
        safe: Safety::Safe,
        replacement: None,
        note: Some("Considered quantum-resistant"),
    },
    AlgorithmVerdict {
        name: "ChaCha20",
        safe: Safety::Safe,
        replacement: None,
        note: Some("256-bit key retains 128-bit quantum security"),
    },
];

/// Look up the verdict for an algorithm name, case-insensitively.
///
/// Returns `None` for names outside the table; callers render that as a
/// "no information" result rather than failing.
pub fn check_algorithm(name: &str) -> Option<&'static AlgorithmVerdict> {
    let trimmed = name.trim();
    VERDICTS
        .iter()
        .find(|verdict| verdict.name.eq_ignore_ascii_case(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let verdict = check_algorithm("rsa").expect("RSA should be in the table");
        assert_eq!(verdict.safe, Safety::Unsafe);
        assert_eq!(verdict.replacement, Some("ML-KEM (CRYSTALS-Kyber)"));
    }

    #[test]
    fn test_aes_256_verdict() {
        let verdict = check_algorithm("AES-256").expect("AES-256 should be in the table");
        assert_eq!(verdict.safe, Safety::Safe);
        assert_eq!(verdict.note, Some("128-bit quantum security"));
        assert_eq!(verdict.replacement, None);
    }

    #[test]
    fn test_unknown_algorithm_is_not_an_error() {
        assert!(check_algorithm("quantum-foo").is_none());
        assert!(check_algorithm("").is_none());
    }

    #[test]
    fn test_safety_serialization() {
        let json = serde_json::to_value(check_algorithm("AES-128").unwrap()).unwrap();
        assert_eq!(json["safe"], serde_json::json!("partially"));

        let json = serde_json::to_value(check_algorithm("SHA-3").unwrap()).unwrap();
        assert_eq!(json["safe"], serde_json::json!(true));

        let json = serde_json::to_value(check_algorithm("DSA").unwrap()).unwrap();
        assert_eq!(json["safe"], serde_json::json!(false));
    }
}
