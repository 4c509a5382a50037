//! Workflow engine
//!
//! This module contains the job that sequences discovery and copying.

use std::cell::Cell;
use std::path::PathBuf;
use std::time::Instant;

use crate::config::JobSettings;
use crate::discovery::{FileList, scan_input_root};
use crate::errors::Result;
use crate::file_ops::{FileActionResult, transform_and_copy};
use crate::logging::{JobLogger, LogFacade};

use super::context::{JobResponse, JobStage};

/// Copies chunked files from the input root into the output root
///
/// The job owns its settings and logs through the injected `L`. It is
/// single-threaded; every step blocks until its I/O is done.
#[derive(Debug)]
pub struct TransformationJob<L: JobLogger = LogFacade> {
    settings: JobSettings,
    logger: L,
    stage: Cell<JobStage>,
}

impl TransformationJob<LogFacade> {
    /// Creates a job that logs through the `log` facade
    pub fn new(settings: JobSettings) -> Self {
        TransformationJob::with_logger(settings, LogFacade)
    }
}

impl<L: JobLogger> TransformationJob<L> {
    /// Creates a job that logs through `logger`
    ///
    /// # Arguments
    /// * `settings` - Settings the job owns for its whole life
    /// * `logger` - Receiver of every record the job emits
    pub fn with_logger(settings: JobSettings, logger: L) -> Self {
        TransformationJob {
            settings,
            logger,
            stage: Cell::new(JobStage::Idle),
        }
    }

    pub fn settings(&self) -> &JobSettings {
        &self.settings
    }

    /// Stage the job has reached
    pub fn stage(&self) -> JobStage {
        self.stage.get()
    }

    /// Lists the files this job will process
    ///
    /// Paths are absolute and sorted; only file names containing the chunk
    /// (when one is set) are returned. A missing input root yields nothing.
    pub fn discover(&self) -> Result<FileList> {
        self.logger.info("Extracting list of files");
        scan_input_root(
            self.settings.input_source(),
            self.settings.chunk(),
            &self.logger,
        )
    }

    /// Copies `files` into the output root as `<stem>_transformed<ext>`
    ///
    /// # Returns
    /// * `Result<Vec<FileActionResult>>` - One entry per copied file, in list order
    ///
    /// # Errors
    /// * Returns the first copy or directory creation error
    pub fn transform_and_copy(&self, files: &[PathBuf]) -> Result<Vec<FileActionResult>> {
        transform_and_copy(files, self.settings.output_directory(), &self.logger)
    }

    /// Runs discovery then copying and reports the elapsed time
    ///
    /// # Errors
    /// The first filesystem error aborts the run; the stage is left at `Failed`
    pub fn run(&self) -> Result<JobResponse> {
        self.logger
            .debug(&format!("Running job with settings {:?}", self.settings));
        let start_time = Instant::now();

        match self.run_stages() {
            Ok(results) => {
                self.stage.set(JobStage::Done);
                Ok(JobResponse::success(results.len(), start_time.elapsed()))
            }
            Err(e) => {
                self.stage.set(JobStage::Failed);
                Err(e)
            }
        }
    }

    fn run_stages(&self) -> Result<Vec<FileActionResult>> {
        self.stage.set(JobStage::Discovering);
        let file_list = self.discover()?;

        self.stage.set(JobStage::Copying);
        self.transform_and_copy(&file_list)
    }
}
