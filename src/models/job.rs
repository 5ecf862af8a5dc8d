//! Conversion jobs

use std::path::{Path, PathBuf};

/// An ordered list of files to convert.
///
/// The list is taken as given: no directory scanning, no de-duplication.
/// A file listed twice is converted twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionJob {
    pub name: Option<String>,
    pub files: Vec<PathBuf>,
    /// Directory the files are resolved against. `None` means the
    /// working directory from the conversion options.
    pub dir: Option<PathBuf>,
}

impl ConversionJob {
    pub fn new<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            name: None,
            files: files.into_iter().map(Into::into).collect(),
            dir: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Label used in logs and reports.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("(ad hoc)")
    }

    /// Filenames that appear more than once, in first-seen order.
    pub fn duplicates(&self) -> Vec<&Path> {
        let mut seen: Vec<&Path> = Vec::new();
        let mut dups: Vec<&Path> = Vec::new();
        for file in &self.files {
            let file = file.as_path();
            if seen.contains(&file) {
                if !dups.contains(&file) {
                    dups.push(file);
                }
            } else {
                seen.push(file);
            }
        }
        dups
    }
}

/// What to do when the output file is already on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Invoke the converter anyway and let it apply its own convention.
    #[default]
    Delegate,
    /// Leave the existing output alone and skip the input.
    Skip,
}
