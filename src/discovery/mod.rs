//! File discovery module
//!
//! This module contains components for scanning the input root and finding files.

mod scanner;

pub use scanner::{FileList, discovery_pattern, scan_input_root};
