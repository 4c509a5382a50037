//! Workflow context
//!
//! This module defines the job stages and the response a finished job returns.

use std::time::Duration;

use crate::constants::STATUS_OK;

/// Stage a transformation job is in
///
/// A job moves `Idle -> Discovering -> Copying -> Done`, or to `Failed` from
/// either working stage. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobStage {
    #[default]
    Idle,
    Discovering,
    Copying,
    Done,
    Failed,
}

/// Outcome of a job that ran to completion
#[derive(Debug, Clone, PartialEq)]
pub struct JobResponse {
    /// Always 200 for a completed job
    pub status_code: u16,
    /// Human-readable summary with the elapsed wall-clock seconds
    pub message: String,
    /// Number of files copied
    pub files_transformed: usize,
    /// Wall-clock time from start to the last copy
    pub elapsed: Duration,
}

impl JobResponse {
    /// Builds the response of a completed job
    ///
    /// # Arguments
    /// * `files_transformed` - Number of files copied
    /// * `elapsed` - Wall-clock duration of the run
    pub fn success(files_transformed: usize, elapsed: Duration) -> Self {
        JobResponse {
            status_code: STATUS_OK,
            message: format!("Total time for job {}", elapsed.as_secs_f64()),
            files_transformed,
            elapsed,
        }
    }
}
