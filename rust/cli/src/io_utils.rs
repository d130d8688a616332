//! File I/O utilities for reading hand-history logs and ensuring directories.
//!
//! This module provides helper functions for file operations used across CLI commands:
//! - Reading text files with automatic .zst decompression
//! - Listing the log files of a directory
//! - Ensuring parent directories exist before file writes
//!
//! ## Error Handling
//!
//! Functions return `Result` types with appropriate error messages. I/O errors
//! are converted to `String` for easy integration with command error handling.
//!
//! ## Compressed File Support
//!
//! The `read_text_auto` function automatically detects and decompresses .zst
//! (Zstandard) compressed files based on the file extension.

use std::path::{Path, PathBuf};

/// Extensions picked up when a directory is given as input.
pub const LOG_EXTENSIONS: &[&str] = &["txt", "log", "zst"];

/// Read text file with automatic .zst decompression detection.
///
/// If the path ends with ".zst", the file is decompressed using Zstandard.
/// A leading UTF-8 BOM is stripped, since some poker clients write one.
///
/// # Example
///
/// ```rust,no_run
/// # use actiontrack_cli::io_utils::read_text_auto;
///
/// // Plain export
/// let content = read_text_auto("session.txt").unwrap();
///
/// // Compressed archive (automatic decompression)
/// let archived = read_text_auto("session.txt.zst").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        // Read entire compressed file then decompress; more portable across platforms
        let comp = std::fs::read(path).map_err(|e| e.to_string())?;
        let dec = zstd::stream::decode_all(comp.as_slice()).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Lists the log files directly inside `dir`, sorted by path.
///
/// Only regular files whose extension is in [`LOG_EXTENSIONS`] are returned;
/// subdirectories are not descended into.
pub fn collect_log_files(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory {}: {}", dir.display(), e))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| e.to_string())?.path();
        let is_log = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| LOG_EXTENSIONS.contains(&ext));
        if path.is_file() && is_log {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Ensure parent directory exists for given path, creating if needed.
///
/// ```rust,no_run
/// use std::path::Path;
/// # use actiontrack_cli::io_utils::ensure_parent_dir;
///
/// let path = Path::new("out/2026-10/hands.jsonl");
/// ensure_parent_dir(path).unwrap();
/// ```
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
