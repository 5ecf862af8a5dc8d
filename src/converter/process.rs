//! Converter runner backed by a real child process

use super::{ConverterRunner, Invocation, RunStatus};
use crate::error::LaunchError;
use std::process::{Command, ExitStatus};
use tracing::debug;

/// Spawns the converter with `std::process::Command` and blocks until it
/// exits. Standard streams are inherited so the converter's own
/// diagnostics reach the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ConverterRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<RunStatus, LaunchError> {
        debug!(command = %invocation.command_line(), dir = %invocation.work_dir.display(), "running converter");

        let status = Command::new(&invocation.program)
            .args(invocation.args())
            .current_dir(&invocation.work_dir)
            .status()
            .map_err(|e| LaunchError::from_io(&invocation.program, e))?;

        Ok(run_status(invocation, status))
    }
}

fn run_status(invocation: &Invocation, status: ExitStatus) -> RunStatus {
    if status.success() {
        RunStatus::Success
    } else {
        RunStatus::Failed {
            code: status.code(),
            detail: format!("`{}` returned {}", invocation.command_line(), status),
        }
    }
}
