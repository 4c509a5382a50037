//! Path generation module
//!
//! This module contains components for generating destination paths.

mod transformer;

pub use transformer::{destination_path, transformed_file_name};
