//! File operations module
//!
//! This module contains the copy step of the transformation job.

mod actions;

pub use actions::{FileActionResult, transform_and_copy};
