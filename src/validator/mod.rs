//! Validation module

pub mod preflight;

use crate::models::ConversionJob;
use crate::ConversionOptions;
use anyhow::Result;

pub fn validate_batch(job: &ConversionJob, options: &ConversionOptions) -> Result<()> {
    preflight::validate_preflight(job, options)
}
