//! Core module for quantum-readiness scanning
//!
//! This module contains the pattern classifier, the algorithm verdict table,
//! and the scanner that folds classifier output into scored reports.

pub mod algorithms;
pub mod patterns;
pub mod scanner;
