//! Markdown to Word batch converter
//!
//! Runs an external document converter (pandoc or anything with the same
//! `<input> -o <output>` calling convention) over an ordered list of
//! markdown files, one file at a time, and reports what happened to each.

pub mod models;
pub mod batch;
pub mod config;
pub mod converter;
pub mod error;
pub mod parser;
pub mod validator;
pub mod report;
pub mod utils;

pub use models::{BatchState, BatchSummary, ConversionJob, FileOutcome, OutcomeKind, OverwritePolicy};
pub use batch::run_batch;
pub use converter::{ConverterConfig, ConverterRunner, ProcessRunner};

use anyhow::Result;
use std::path::PathBuf;

/// Main entry point: validate, then convert every file of `job`.
///
/// `on_outcome` sees each file's outcome as soon as it is known.
pub fn convert_batch<R: ConverterRunner>(
    job: &ConversionJob,
    options: &ConversionOptions,
    runner: R,
    on_outcome: impl FnMut(&FileOutcome),
) -> Result<BatchSummary> {
    // 1. Pre-flight checks
    validator::validate_batch(job, options)?;

    // 2. Convert, in list order
    Ok(run_batch(job, options, runner, on_outcome))
}

/// Same as [`convert_batch`] with the converter run as a real child process.
pub fn convert_files(
    job: &ConversionJob,
    options: &ConversionOptions,
    on_outcome: impl FnMut(&FileOutcome),
) -> Result<BatchSummary> {
    convert_batch(job, options, ProcessRunner::new(), on_outcome)
}

#[derive(Debug, Clone)]
pub struct ConversionOptions {
    pub converter: ConverterConfig,
    /// Extension given to outputs, without the dot.
    pub target_extension: String,
    /// Directory inputs are resolved against. Jobs with their own `dir`
    /// are resolved against `work_dir/dir`.
    pub work_dir: PathBuf,
    pub overwrite: OverwritePolicy,
}

impl ConversionOptions {
    pub fn new(converter: ConverterConfig) -> Self {
        Self {
            converter,
            target_extension: utils::DEFAULT_TARGET_EXTENSION.to_string(),
            work_dir: PathBuf::from("."),
            overwrite: OverwritePolicy::default(),
        }
    }

    /// Directory a job's files live in.
    pub fn job_dir(&self, job: &ConversionJob) -> PathBuf {
        match &job.dir {
            Some(dir) => self.work_dir.join(dir),
            None => self.work_dir.clone(),
        }
    }
}
