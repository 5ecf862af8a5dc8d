//! Helper utility functions

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

pub const DEFAULT_TARGET_EXTENSION: &str = "docx";

/// Swap the final extension of `input` for `extension`.
///
/// Only the last extension segment is replaced and the directory part is
/// kept as is, so `notes/Report.v2.md` becomes `notes/Report.v2.docx`.
/// A name without an extension gets one appended.
pub fn derive_output_path(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

/// Normalize a user-supplied target extension (`.docx`, `DOCX`, `docx`).
pub fn normalize_extension(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let ext = trimmed.strip_prefix('.').unwrap_or(trimmed);

    if ext.is_empty()
        || ext.contains('.')
        || ext.contains('/')
        || ext.contains('\\')
        || ext.chars().any(char::is_whitespace)
    {
        return Err(ConfigError::InvalidExtension(raw.to_string()));
    }

    Ok(ext.to_ascii_lowercase())
}

/// Pin a converter path to the directory it was configured from.
///
/// The converter runs with its working directory set to the job
/// directory, so a relative path such as `./tools/pandoc` must be made
/// absolute first. Bare names like `pandoc` stay as they are and go
/// through the normal `PATH` lookup.
pub fn resolve_program_path(program: &Path) -> PathBuf {
    let has_dir = program
        .parent()
        .map_or(false, |parent| !parent.as_os_str().is_empty());

    if !has_dir || program.is_absolute() {
        return program.to_path_buf();
    }

    std::path::absolute(program).unwrap_or_else(|_| program.to_path_buf())
}
