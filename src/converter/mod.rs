//! External converter invocation

pub mod probe;
pub mod process;

pub use probe::{parse_version_banner, probe_converter, ConverterInfo};
pub use process::ProcessRunner;

use crate::error::LaunchError;
use std::ffi::OsString;
use std::path::PathBuf;

/// Where the converter lives and what extra arguments it always gets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    pub program: PathBuf,
    pub extra_args: Vec<String>,
}

impl ConverterConfig {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            extra_args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_args = args.into_iter().map(Into::into).collect();
        self
    }
}

/// One run of the converter: `<program> <input> -o <output> [extra args]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
    pub extra_args: Vec<String>,
    /// Working directory of the child process. Input and output are
    /// relative to it.
    pub work_dir: PathBuf,
}

impl Invocation {
    pub fn args(&self) -> Vec<OsString> {
        let mut args = vec![
            self.input.clone().into_os_string(),
            OsString::from("-o"),
            self.output.clone().into_os_string(),
        ];
        args.extend(self.extra_args.iter().map(OsString::from));
        args
    }

    /// Shell-like rendering for logs and failure messages.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_os_str().to_os_string())
            .chain(self.args())
            .map(|arg| {
                let arg = arg.to_string_lossy().into_owned();
                if arg.is_empty() || arg.contains(char::is_whitespace) {
                    format!("'{}'", arg)
                } else {
                    arg
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// How a converter run ended once it was started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Failed { code: Option<i32>, detail: String },
}

/// Runs the converter and waits for it to exit.
pub trait ConverterRunner {
    fn run(&self, invocation: &Invocation) -> Result<RunStatus, LaunchError>;
}

impl<R: ConverterRunner + ?Sized> ConverterRunner for &R {
    fn run(&self, invocation: &Invocation) -> Result<RunStatus, LaunchError> {
        (**self).run(invocation)
    }
}
