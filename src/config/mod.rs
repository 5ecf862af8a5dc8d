//! Settings file and converter resolution
//!
//! Nothing about the converter is compiled in. Its location comes from, in
//! order: the `--converter` flag, the `MD2DOCX_CONVERTER` environment
//! variable, or the `converter` key of the settings file.

use crate::converter::ConverterConfig;
use crate::error::ConfigError;
use crate::models::ConversionJob;
use crate::utils::{normalize_extension, DEFAULT_TARGET_EXTENSION};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONVERTER_ENV: &str = "MD2DOCX_CONVERTER";
pub const CONFIG_ENV: &str = "MD2DOCX_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "md2docx.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub converter: Option<PathBuf>,
    pub converter_args: Vec<String>,
    pub target_extension: Option<String>,
    pub jobs: BTreeMap<String, JobSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobSettings {
    pub files: Vec<PathBuf>,
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse settings")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    /// Load settings from an explicit path, `MD2DOCX_CONFIG`, or
    /// `./md2docx.toml`. Only the implicit default file may be absent.
    pub fn load(explicit: Option<&Path>, env_value: Option<&str>) -> Result<Self> {
        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from));

        match named {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::SettingsMissing(path).into());
                }
                debug!(path = %path.display(), "loading settings");
                Self::from_file(&path)
            }
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    debug!(path = %default.display(), "loading settings");
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Pick the converter: flag, then environment, then settings.
    pub fn resolve_converter(
        &self,
        flag: Option<&Path>,
        env_value: Option<&str>,
    ) -> Result<ConverterConfig, ConfigError> {
        let program = flag
            .map(Path::to_path_buf)
            .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
            .or_else(|| self.converter.clone())
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(ConfigError::ConverterUnset)?;

        Ok(ConverterConfig::new(program).with_args(self.converter_args.iter().cloned()))
    }

    pub fn resolve_extension(&self, flag: Option<&str>) -> Result<String, ConfigError> {
        let raw = flag
            .or(self.target_extension.as_deref())
            .unwrap_or(DEFAULT_TARGET_EXTENSION);
        normalize_extension(raw)
    }

    pub fn job(&self, name: &str) -> Result<ConversionJob, ConfigError> {
        let settings = self.jobs.get(name).ok_or_else(|| ConfigError::UnknownJob {
            name: name.to_string(),
            available: if self.jobs.is_empty() {
                "none".to_string()
            } else {
                self.job_names().join(", ")
            },
        })?;

        let mut job = ConversionJob::new(settings.files.iter().cloned()).named(name);
        job.dir = settings.dir.clone();
        Ok(job)
    }

    pub fn job_names(&self) -> Vec<&str> {
        self.jobs.keys().map(String::as_str).collect()
    }
}
