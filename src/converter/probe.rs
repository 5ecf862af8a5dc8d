//! Converter version probing

use crate::error::LaunchError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::path::Path;
use std::process::Command;

lazy_static! {
    // "pandoc 3.1.9", "pandoc.exe 2.19.2", "pandoc-3.1 v3.1.0"
    static ref BANNER_PATTERN: Regex = Regex::new(
        r"^\s*(?P<name>\S+?)\s+v?(?P<version>\d+(?:\.\d+)*)"
    ).unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConverterInfo {
    pub name: String,
    pub version: Option<String>,
    /// First line of the `--version` output, trimmed.
    pub banner: String,
}

/// Parse the first line of a `--version` banner.
pub fn parse_version_banner(output: &str) -> Option<ConverterInfo> {
    let banner = output.lines().find(|l| !l.trim().is_empty())?.trim().to_string();

    if let Some(caps) = BANNER_PATTERN.captures(&banner) {
        return Some(ConverterInfo {
            name: caps["name"].to_string(),
            version: Some(caps["version"].to_string()),
            banner: banner.clone(),
        });
    }

    let name = banner.split_whitespace().next().unwrap_or_default().to_string();
    Some(ConverterInfo {
        name,
        version: None,
        banner,
    })
}

/// Run `<program> --version` and report what answered.
///
/// Only the `check` command probes; the batch reports an unusable
/// converter when it first tries to run it.
pub fn probe_converter(program: &Path) -> anyhow::Result<ConverterInfo> {
    let output = Command::new(program)
        .arg("--version")
        .output()
        .map_err(|e| LaunchError::from_io(program, e))?;

    if !output.status.success() {
        anyhow::bail!(
            "`{} --version` returned {}",
            program.display(),
            output.status
        );
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_version_banner(&stdout)
        .ok_or_else(|| anyhow::anyhow!("`{} --version` printed nothing", program.display()))
}
