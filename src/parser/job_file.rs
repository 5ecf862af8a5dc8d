//! Job list files
//!
//! Two layouts are accepted: a JSON (or JSON5) array of filenames, or plain
//! text with one filename per line where blank lines and `#` comments are
//! ignored.

use crate::models::ConversionJob;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Parse a job list from its text.
pub fn parse_job_list(content: &str) -> Result<Vec<PathBuf>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    if content.trim_start().starts_with('[') {
        let files: Vec<String> = json5::from_str(content)
            .context("Failed to parse job list as a JSON array of filenames")?;
        return Ok(files.into_iter().map(PathBuf::from).collect());
    }

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(PathBuf::from)
        .collect())
}

/// Load a job from a list file. The job is named after the file stem.
pub fn load_job_file(path: &Path) -> Result<ConversionJob> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read job file {}", path.display()))?;
    let files = parse_job_list(&content)
        .with_context(|| format!("Invalid job file {}", path.display()))?;

    let mut job = ConversionJob::new(files);
    job.name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string);
    Ok(job)
}
