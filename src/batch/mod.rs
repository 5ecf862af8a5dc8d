//! The batch converter
//!
//! Walks a job's file list in order and runs the converter once per file
//! that exists. Missing inputs and failed conversions are reported and the
//! batch moves on; a converter that cannot be launched aborts the batch.

use crate::converter::{ConverterRunner, Invocation, RunStatus};
use crate::models::{BatchState, BatchSummary, ConversionJob, FileOutcome, OutcomeKind, OverwritePolicy};
use crate::utils::{derive_output_path, resolve_program_path};
use crate::ConversionOptions;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct BatchConverter<'a, R: ConverterRunner> {
    job: &'a ConversionJob,
    options: &'a ConversionOptions,
    runner: R,
    program: PathBuf,
    work_dir: PathBuf,
    state: BatchState,
}

impl<'a, R: ConverterRunner> BatchConverter<'a, R> {
    pub fn new(job: &'a ConversionJob, options: &'a ConversionOptions, runner: R) -> Self {
        let work_dir = options.job_dir(job);
        let program = resolve_program_path(&options.converter.program);
        Self {
            job,
            options,
            runner,
            program,
            work_dir,
            state: BatchState::NotStarted,
        }
    }

    pub fn state(&self) -> BatchState {
        self.state
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Process every file, handing each outcome to `on_outcome` as soon as
    /// it is known.
    pub fn run(mut self, mut on_outcome: impl FnMut(&FileOutcome)) -> BatchSummary {
        let mut outcomes = Vec::with_capacity(self.job.len());

        for (index, input) in self.job.files.iter().enumerate() {
            self.state = BatchState::Processing(index);

            let outcome = self.process_file(input);
            log_outcome(&outcome);
            on_outcome(&outcome);

            let fatal = outcome.is_fatal();
            outcomes.push(outcome);
            if fatal {
                self.state = BatchState::Aborted;
                break;
            }
        }

        if self.state != BatchState::Aborted {
            self.state = BatchState::Done;
        }

        BatchSummary {
            job: self.job.name.clone(),
            state: self.state,
            outcomes,
        }
    }

    fn process_file(&self, input: &Path) -> FileOutcome {
        if !self.work_dir.join(input).is_file() {
            return FileOutcome::new(input, OutcomeKind::MissingInput);
        }

        let output = derive_output_path(input, &self.options.target_extension);

        if self.options.overwrite == OverwritePolicy::Skip && self.work_dir.join(&output).exists() {
            return FileOutcome::new(input, OutcomeKind::SkippedExisting { output });
        }

        let invocation = Invocation {
            program: self.program.clone(),
            input: input.to_path_buf(),
            output: output.clone(),
            extra_args: self.options.converter.extra_args.clone(),
            work_dir: self.work_dir.clone(),
        };

        let kind = match self.runner.run(&invocation) {
            Ok(RunStatus::Success) => OutcomeKind::Converted { output },
            Ok(RunStatus::Failed { code, detail }) => OutcomeKind::ConversionFailed { output, detail, code },
            Err(err) => OutcomeKind::ExecutableUnavailable {
                program: err.program().clone(),
                not_found: err.is_not_found(),
                detail: err.to_string(),
            },
        };

        FileOutcome::new(input, kind)
    }
}

/// Run `job` to completion (or abort) with the given runner.
pub fn run_batch<R: ConverterRunner>(
    job: &ConversionJob,
    options: &ConversionOptions,
    runner: R,
    on_outcome: impl FnMut(&FileOutcome),
) -> BatchSummary {
    BatchConverter::new(job, options, runner).run(on_outcome)
}

fn log_outcome(outcome: &FileOutcome) {
    let input = outcome.input.display();
    match &outcome.kind {
        OutcomeKind::Converted { output } => info!(%input, output = %output.display(), "converted"),
        OutcomeKind::MissingInput => info!(%input, "input missing"),
        OutcomeKind::SkippedExisting { output } => info!(%input, output = %output.display(), "output exists, skipped"),
        OutcomeKind::ConversionFailed { code, .. } => info!(%input, ?code, "conversion failed"),
        OutcomeKind::ExecutableUnavailable { program, .. } => {
            info!(%input, program = %program.display(), "converter unavailable, aborting batch")
        }
    }
}
