//! Job settings data structures
//!
//! This module contains the settings a transformation job is constructed with.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Settings for a single transformation job
///
/// Settings are fixed once the job is built; the accessors only hand out
/// borrowed views.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct JobSettings {
    /// Directory tree scanned for candidate files
    input_source: PathBuf,
    /// Flat directory receiving the renamed copies
    output_directory: PathBuf,
    /// Substring a file name must contain to be processed
    #[serde(default)]
    chunk: Option<String>,
    /// Free-form value passed through untouched
    #[serde(default)]
    extra_param: Option<String>,
}

impl JobSettings {
    /// Creates settings with no chunk filter and no extra parameter
    ///
    /// # Arguments
    /// * `input_source` - Directory tree to scan
    /// * `output_directory` - Directory receiving the transformed copies
    pub fn new(input_source: impl Into<PathBuf>, output_directory: impl Into<PathBuf>) -> Self {
        JobSettings {
            input_source: input_source.into(),
            output_directory: output_directory.into(),
            chunk: None,
            extra_param: None,
        }
    }

    /// Restrict processing to files whose name contains `chunk`
    pub fn with_chunk(mut self, chunk: impl Into<String>) -> Self {
        self.chunk = Some(chunk.into());
        self
    }

    /// Attach a free-form value the job carries but never reads
    pub fn with_extra_param(mut self, extra_param: impl Into<String>) -> Self {
        self.extra_param = Some(extra_param.into());
        self
    }

    /// Directory tree scanned for candidate files
    pub fn input_source(&self) -> &Path {
        &self.input_source
    }

    /// Flat directory receiving the renamed copies
    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Substring filter on file names, if any
    pub fn chunk(&self) -> Option<&str> {
        self.chunk.as_deref()
    }

    pub fn extra_param(&self) -> Option<&str> {
        self.extra_param.as_deref()
    }
}
