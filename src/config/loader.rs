//! Job settings loading functionality
//!
//! Settings come either from an explicit JSON object or from
//! `TRANSFORMATION_JOB_*` environment variables.

use std::env;
use std::path::PathBuf;

use log::debug;

use crate::constants::{ENV_CHUNK, ENV_EXTRA_PARAM, ENV_INPUT_SOURCE, ENV_OUTPUT_DIRECTORY};
use crate::errors::{Result, config_parsing_error, missing_setting_error};

use super::model::JobSettings;

/// Where a job's settings are resolved from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    /// A serialised JSON object, as passed to `--job-settings`
    FromJson(Vec<u8>),
    /// The `TRANSFORMATION_JOB_*` process environment variables
    FromEnvironment,
}

impl JobSettings {
    /// Resolves settings from the given source
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed, carries unknown fields, or
    /// if a required value is missing from the source
    pub fn load(source: SettingsSource) -> Result<Self> {
        match source {
            SettingsSource::FromJson(bytes) => JobSettings::from_json(&bytes),
            SettingsSource::FromEnvironment => {
                JobSettings::from_lookup(|name| env::var(name).ok())
            }
        }
    }

    /// Parses settings from a JSON object
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let settings: JobSettings = serde_json::from_slice(bytes).map_err(|e| {
            let detail = format!("Failed to parse job settings JSON: {e}");
            config_parsing_error(e, &detail)
        })?;

        debug!("Loaded job settings from JSON: {settings:?}");
        Ok(settings)
    }

    /// Builds settings from a variable lookup
    ///
    /// `lookup` receives the full variable name (e.g.
    /// `TRANSFORMATION_JOB_INPUT_SOURCE`) and returns its value when set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input_source = lookup(ENV_INPUT_SOURCE)
            .map(PathBuf::from)
            .ok_or_else(|| missing_setting_error(ENV_INPUT_SOURCE))?;
        let output_directory = lookup(ENV_OUTPUT_DIRECTORY)
            .map(PathBuf::from)
            .ok_or_else(|| missing_setting_error(ENV_OUTPUT_DIRECTORY))?;

        let mut settings = JobSettings::new(input_source, output_directory);
        if let Some(chunk) = lookup(ENV_CHUNK) {
            settings = settings.with_chunk(chunk);
        }
        if let Some(extra_param) = lookup(ENV_EXTRA_PARAM) {
            settings = settings.with_extra_param(extra_param);
        }

        debug!("Loaded job settings from environment: {settings:?}");
        Ok(settings)
    }
}
