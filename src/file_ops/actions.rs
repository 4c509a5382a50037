//! File operation functionality
//!
//! This module copies discovered files into the flat output root.

use std::fs::create_dir_all;
use std::io;
use std::path::{Path, PathBuf};

use fs_extra::file::{CopyOptions, copy};

use crate::errors::{Result, file_operation_error};
use crate::logging::JobLogger;
use crate::path_gen::destination_path;

/// Result of copying one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileActionResult {
    /// The source path
    pub source_path: PathBuf,
    /// The target path
    pub target_path: PathBuf,
}

/// Copies every file into `output_root` under its transformed name
///
/// Files are handled strictly in list order. The output root is created on
/// the first copy, so an empty list touches nothing. Existing destinations are
/// overwritten.
///
/// # Arguments
/// * `files` - Sources to copy, in processing order
/// * `output_root` - Flat directory receiving the copies
/// * `logger` - Receives one debug line per file
///
/// # Returns
/// * `Result<Vec<FileActionResult>>` - Source and target of every copied file
///
/// # Errors
/// Returns on the first failure; files copied before it are left in place
pub fn transform_and_copy<L: JobLogger>(
    files: &[PathBuf],
    output_root: &Path,
    logger: &L,
) -> Result<Vec<FileActionResult>> {
    if files.is_empty() {
        return Ok(Vec::new());
    }

    create_dir_all(output_root)
        .map_err(|e| file_operation_error(e, output_root.to_path_buf(), "create directory"))?;

    let options = CopyOptions::new().overwrite(true);
    let mut results = Vec::with_capacity(files.len());

    for source_path in files {
        logger.debug(&format!("Transforming file: {}", source_path.display()));
        results.push(copy_file(source_path, output_root, &options)?);
    }

    Ok(results)
}

fn copy_file(
    source_path: &Path,
    output_root: &Path,
    options: &CopyOptions,
) -> Result<FileActionResult> {
    let target_path = destination_path(source_path, output_root)?;

    copy(source_path, &target_path, options)
        .map_err(|e| file_operation_error(into_io_error(e), source_path.to_path_buf(), "copy"))?;

    Ok(FileActionResult {
        source_path: source_path.to_path_buf(),
        target_path,
    })
}

/// fs_extra folds common io kinds into its own enum; restore them
fn into_io_error(err: fs_extra::error::Error) -> io::Error {
    use fs_extra::error::ErrorKind;

    let kind = match &err.kind {
        ErrorKind::NotFound => io::ErrorKind::NotFound,
        ErrorKind::PermissionDenied => io::ErrorKind::PermissionDenied,
        ErrorKind::AlreadyExists => io::ErrorKind::AlreadyExists,
        ErrorKind::Interrupted => io::ErrorKind::Interrupted,
        ErrorKind::Io(io_error) => io_error.kind(),
        _ => io::ErrorKind::Other,
    };
    io::Error::new(kind, err)
}
