//! Markdown report generation

use crate::models::{BatchState, BatchSummary, OutcomeKind};
use anyhow::Result;

pub fn generate_markdown_report(summary: &BatchSummary) -> Result<String> {
    let mut report = String::new();

    report.push_str("# Markdown to Word Conversion Report\n\n");

    // Summary
    report.push_str("## Summary\n\n");
    if let Some(job) = &summary.job {
        report.push_str(&format!("- **Job**: {}\n", job));
    }
    report.push_str(&format!("- **Status**: {}\n", match summary.state {
        BatchState::Aborted => "❌ Aborted",
        _ if summary.is_clean() => "✅ Complete",
        _ => "⚠️ Complete with errors",
    }));
    report.push_str(&format!("- **Files Listed**: {}\n", summary.outcomes.len()));
    report.push_str(&format!("- **Converted**: {}\n", summary.converted()));
    report.push_str(&format!("- **Failed**: {}\n", summary.failed()));
    report.push_str(&format!("- **Not Found**: {}\n", summary.missing()));
    if summary.skipped() > 0 {
        report.push_str(&format!("- **Skipped (output exists)**: {}\n", summary.skipped()));
    }
    report.push('\n');

    if summary.outcomes.is_empty() {
        report.push_str("No files were listed.\n");
        return Ok(report);
    }

    // Per-file table
    report.push_str("## Files\n\n");
    report.push_str("| Input | Result | Output |\n");
    report.push_str("|---|---|---|\n");
    for outcome in &summary.outcomes {
        let (result, output) = match &outcome.kind {
            OutcomeKind::Converted { output } => ("converted", output.display().to_string()),
            OutcomeKind::MissingInput => ("not found", String::new()),
            OutcomeKind::SkippedExisting { output } => ("skipped", output.display().to_string()),
            OutcomeKind::ConversionFailed { output, .. } => ("failed", output.display().to_string()),
            OutcomeKind::ExecutableUnavailable { .. } => ("aborted", String::new()),
        };
        report.push_str(&format!("| {} | {} | {} |\n", outcome.input.display(), result, output));
    }
    report.push('\n');

    // Failure details
    let failures: Vec<_> = summary
        .outcomes
        .iter()
        .filter_map(|o| match &o.kind {
            OutcomeKind::ConversionFailed { detail, .. }
            | OutcomeKind::ExecutableUnavailable { detail, .. } => Some((o, detail)),
            _ => None,
        })
        .collect();

    if !failures.is_empty() {
        report.push_str("## Errors\n\n");
        for (outcome, detail) in failures {
            report.push_str(&format!("- `{}`: {}\n", outcome.input.display(), detail));
        }
        report.push('\n');
    }

    if summary.aborted() {
        report.push_str("The batch stopped early because the converter could not be launched. ");
        report.push_str("Files after the last row above were not attempted.\n");
    }

    Ok(report)
}
