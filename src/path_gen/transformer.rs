//! Destination naming
//!
//! A transformed file keeps its stem and extension with a fixed suffix in
//! between, and lands directly in the output root.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::constants::TRANSFORMED_SUFFIX;
use crate::errors::{Result, path_operation_error};

/// Returns `<stem>_transformed<ext>` for the final component of `source`
///
/// Only the last extension is split off, so `archive.tar.gz` becomes
/// `archive.tar_transformed.gz`. A trailing dot is kept. Leading dots never
/// start an extension, so `..bin` becomes `..bin_transformed`.
///
/// # Arguments
/// * `source` - Path whose final component is renamed
///
/// # Returns
/// The new file name, without any directory
///
/// # Errors
/// Returns an error if `source` has no file name (e.g. `/` or `..`)
pub fn transformed_file_name(source: &Path) -> Result<OsString> {
    let file_name = source
        .file_name()
        .ok_or_else(|| path_operation_error(source.to_path_buf(), "get file name of"))?;
    let stem = source
        .file_stem()
        .ok_or_else(|| path_operation_error(source.to_path_buf(), "get file stem of"))?;

    let extension = source
        .extension()
        .filter(|_| !stem.as_encoded_bytes().iter().all(|byte| *byte == b'.'));

    let mut name = match extension {
        Some(_) => stem.to_os_string(),
        None => file_name.to_os_string(),
    };
    name.push(TRANSFORMED_SUFFIX);
    if let Some(extension) = extension {
        name.push(".");
        name.push(extension);
    }

    Ok(name)
}

/// Builds the flat destination for `source` inside `output_root`
///
/// The source's own directories are discarded, so same-named files from
/// different subdirectories map to the same destination.
pub fn destination_path(source: &Path, output_root: &Path) -> Result<PathBuf> {
    Ok(output_root.join(transformed_file_name(source)?))
}
