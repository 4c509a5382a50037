//! Workflow module
//!
//! This module contains the transformation job and the values it reports.

mod context;
mod engine;

pub use context::{JobResponse, JobStage};
pub use engine::TransformationJob;
