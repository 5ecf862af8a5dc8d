//! Error types callers need to match on

use std::path::PathBuf;
use thiserror::Error;

/// The converter program could not be started at all.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("The converter executable was not found at {}", .program.display())]
    NotFound { program: PathBuf },

    #[error("The converter at {} is not executable", .program.display())]
    PermissionDenied { program: PathBuf },

    #[error("The converter could not be launched from {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LaunchError {
    pub fn from_io(program: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let program = program.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { program },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { program },
            _ => Self::Spawn { program, source: err },
        }
    }

    pub fn program(&self) -> &PathBuf {
        match self {
            Self::NotFound { program }
            | Self::PermissionDenied { program }
            | Self::Spawn { program, .. } => program,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "no converter configured: pass --converter, set {env}, or add `converter = \"...\"` to the settings file",
        env = crate::config::CONVERTER_ENV
    )]
    ConverterUnset,

    #[error("settings file not found: {}", .0.display())]
    SettingsMissing(PathBuf),

    #[error("unknown job `{name}` (configured: {available})")]
    UnknownJob { name: String, available: String },

    #[error("invalid target extension `{0}`: expected a bare extension such as `docx`")]
    InvalidExtension(String),
}
