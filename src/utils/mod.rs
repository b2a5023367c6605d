//! Utility modules for the scanner
//!
//! This module contains helpers for file handling and report formatting.

pub mod file_utils;
pub mod output_formatter;
