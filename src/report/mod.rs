//! Console lines and batch reports

pub mod generator;

use crate::models::{BatchSummary, FileOutcome, OutcomeKind};
use anyhow::Result;

pub const COMPLETION_LINE: &str = "Conversion process complete.";

/// One human-readable line describing a file outcome.
pub fn status_line(outcome: &FileOutcome) -> String {
    let input = outcome.input.display();
    match &outcome.kind {
        OutcomeKind::Converted { output } => {
            format!("Successfully converted {} to {}", input, output.display())
        }
        OutcomeKind::MissingInput => format!("Error: {} not found.", input),
        OutcomeKind::SkippedExisting { output } => {
            format!("Skipped {}: {} already exists", input, output.display())
        }
        OutcomeKind::ConversionFailed { detail, .. } => {
            format!("Error converting {}: {}", input, detail)
        }
        OutcomeKind::ExecutableUnavailable { detail, .. } => format!("Error: {}", detail),
    }
}

pub fn generate_report(summary: &BatchSummary) -> Result<String> {
    generator::generate_markdown_report(summary)
}

pub fn to_json(summary: &BatchSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}
