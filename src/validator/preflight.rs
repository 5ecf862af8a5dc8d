//! Checks run before the first file is touched

use crate::models::ConversionJob;
use crate::utils::normalize_extension;
use crate::ConversionOptions;
use anyhow::Result;
use tracing::warn;

pub fn validate_preflight(job: &ConversionJob, options: &ConversionOptions) -> Result<()> {
    validate_options(options)?;
    validate_work_dir(job, options)?;
    warn_duplicates(job);
    Ok(())
}

fn validate_options(options: &ConversionOptions) -> Result<()> {
    if options.converter.program.as_os_str().is_empty() {
        anyhow::bail!("Converter program path is empty");
    }

    let normalized = normalize_extension(&options.target_extension)?;
    if normalized != options.target_extension {
        anyhow::bail!(
            "Target extension must be lowercase and without a leading dot: `{}`",
            options.target_extension
        );
    }

    Ok(())
}

// A missing working directory would make the child fail to spawn, which
// reads as "converter not found". Catch it here instead.
fn validate_work_dir(job: &ConversionJob, options: &ConversionOptions) -> Result<()> {
    let dir = options.job_dir(job);
    if !dir.is_dir() {
        anyhow::bail!("Working directory {} does not exist", dir.display());
    }
    Ok(())
}

fn warn_duplicates(job: &ConversionJob) {
    for dup in job.duplicates() {
        warn!(file = %dup.display(), job = job.label(), "file listed more than once, it will be converted each time");
    }
}
