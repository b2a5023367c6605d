//! File handling utilities
//!
//! This module provides the file reading and directory enumeration used by
//! the scanner: UTF-8 file reads, the source-extension filter, and recursive
//! traversal with the fixed ignore set.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

/// Extensions treated as JavaScript/TypeScript source. No content-based
/// language detection is performed.
pub const SOURCE_EXTENSIONS: [&str; 4] = ["js", "jsx", "ts", "tsx"];

/// Directory names never descended into, at any depth.
pub const IGNORED_DIRS: [&str; 5] = ["node_modules", ".git", "dist", "build", "coverage"];

/// Check whether a path carries a recognized JS/TS-family extension.
pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SOURCE_EXTENSIONS.iter().any(|known| *known == ext)
        })
        .unwrap_or(false)
}

/// Check whether a directory name is in the fixed ignore set.
pub fn is_ignored_dir(name: &str) -> bool {
    IGNORED_DIRS.iter().any(|ignored| *ignored == name)
}

/// Read a file as UTF-8 text.
///
/// Non-UTF-8 or unreadable files surface as an error here; the scanner
/// converts that into a report-level error rather than propagating it.
pub fn read_file_content(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Recursively enumerate source files under a root, in directory-traversal
/// order (subdirectories descended depth-first as encountered, no sorting).
///
/// Returns the files found plus the first enumeration error, if any; an
/// error does not abort the walk, so callers receive a best-effort partial
/// listing.
pub fn collect_source_files(root: &Path) -> (Vec<PathBuf>, Option<String>) {
    let mut files = Vec::new();
    let mut first_error = None;

    let walker = WalkDir::new(root).follow_links(false).into_iter();
    for entry in walker.filter_entry(|e| {
        // The root is passed through even if its own name is in the ignore
        // set; only descent is filtered.
        e.depth() == 0
            || !(e.file_type().is_dir()
                && e.file_name()
                    .to_str()
                    .map(is_ignored_dir)
                    .unwrap_or(false))
    }) {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && is_source_file(entry.path()) {
                    debug!("Discovered source file: {}", entry.path().display());
                    files.push(entry.path().to_path_buf());
                }
            }
            Err(e) => {
                warn!("Enumeration error under {}: {}", root.display(), e);
                if first_error.is_none() {
                    first_error = Some(e.to_string());
                }
            }
        }
    }

    (files, first_error)
}
