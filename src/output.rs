//! File naming and image saving for the `render` command.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::AppError;

/// Output path value that means "write to stdout".
pub const STDOUT_MARKER: &str = "-";

/// Where a rendered image should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to standard output.
    Stdout,
    /// Write to a file.
    File(PathBuf),
}

/// Generate an output filename from the encoded data.
///
/// Sanitizes the first 50 characters of the data to kebab-case and appends a
/// unix timestamp and the `.png` extension.
#[must_use]
pub fn auto_filename(data: &str) -> String {
    let sanitized = sanitize_for_filename(data, 50);
    let timestamp = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();
    format!("{sanitized}-{timestamp}.png")
}

/// Sanitize a string for use in a filename.
///
/// Converts to lowercase, replaces non-alphanumeric chars with hyphens,
/// collapses consecutive hyphens, and trims to max length.
#[must_use]
pub fn sanitize_for_filename(input: &str, max_len: usize) -> String {
    let mut result = String::with_capacity(max_len);
    let mut last_was_hyphen = true;

    for ch in input.chars() {
        if result.len() >= max_len {
            break;
        }
        if ch.is_ascii_alphanumeric() {
            result.push(ch.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            result.push('-');
            last_was_hyphen = true;
        }
    }

    while result.ends_with('-') {
        result.pop();
    }

    if result.is_empty() {
        "qr-code".to_string()
    } else {
        result
    }
}

/// Resolve the output target: stdout marker, explicit path, or auto-generated name.
#[must_use]
pub fn resolve_output(explicit: Option<&str>, data: &str) -> OutputTarget {
    match explicit {
        Some(STDOUT_MARKER) => OutputTarget::Stdout,
        Some(p) => OutputTarget::File(PathBuf::from(p)),
        None => OutputTarget::File(PathBuf::from(auto_filename(data))),
    }
}

/// Write image bytes to a file, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn save_image(bytes: &[u8], path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Write image bytes to stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn write_stdout(bytes: &[u8]) -> Result<(), AppError> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(bytes)?;
    stdout.flush()?;
    Ok(())
}
