//! Chunked transformation job
//!
//! Selects files from an input root, optionally only those whose name contains
//! a chunk marker, and copies each into a flat output root as
//! `<stem>_transformed<ext>`.

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod logging;
pub mod path_gen;
pub mod workflow;

pub mod prelude {
    pub use crate::config::{JobSettings, SettingsSource};
    pub use crate::errors::{
        config_parsing_error, file_operation_error, glob_pattern_error,
        invalid_filename_error, missing_setting_error, path_operation_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{
        JobLogger, LogFacade, LogLevel, MemoryLogger, init_default_logger, init_logger,
    };
    pub use crate::workflow::{JobResponse, JobStage, TransformationJob};
}
