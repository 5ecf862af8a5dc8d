//! Per-file outcomes and batch results

use serde::Serialize;
use std::path::PathBuf;

/// Result of processing a single input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub input: PathBuf,
    #[serde(flatten)]
    pub kind: OutcomeKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeKind {
    Converted {
        output: PathBuf,
    },
    MissingInput,
    SkippedExisting {
        output: PathBuf,
    },
    ConversionFailed {
        output: PathBuf,
        detail: String,
        code: Option<i32>,
    },
    /// The converter could not be launched. Ends the batch.
    ExecutableUnavailable {
        program: PathBuf,
        detail: String,
        not_found: bool,
    },
}

impl FileOutcome {
    pub fn new(input: impl Into<PathBuf>, kind: OutcomeKind) -> Self {
        Self {
            input: input.into(),
            kind,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.kind, OutcomeKind::Converted { .. })
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self.kind, OutcomeKind::ExecutableUnavailable { .. })
    }

    /// Whether the converter was actually run for this file.
    pub fn invoked_converter(&self) -> bool {
        matches!(
            self.kind,
            OutcomeKind::Converted { .. } | OutcomeKind::ConversionFailed { .. }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchState {
    NotStarted,
    Processing(usize),
    Done,
    Aborted,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub job: Option<String>,
    pub state: BatchState,
    pub outcomes: Vec<FileOutcome>,
}

impl BatchSummary {
    pub fn converted(&self) -> usize {
        self.count(|k| matches!(k, OutcomeKind::Converted { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|k| matches!(k, OutcomeKind::ConversionFailed { .. }))
    }

    pub fn missing(&self) -> usize {
        self.count(|k| matches!(k, OutcomeKind::MissingInput))
    }

    pub fn skipped(&self) -> usize {
        self.count(|k| matches!(k, OutcomeKind::SkippedExisting { .. }))
    }

    pub fn invocations(&self) -> usize {
        self.outcomes.iter().filter(|o| o.invoked_converter()).count()
    }

    pub fn aborted(&self) -> bool {
        self.state == BatchState::Aborted
    }

    /// True when every listed file was converted or deliberately skipped.
    pub fn is_clean(&self) -> bool {
        !self.aborted() && self.failed() == 0 && self.missing() == 0
    }

    fn count(&self, pred: impl Fn(&OutcomeKind) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.kind)).count()
    }
}
