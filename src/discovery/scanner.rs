//! Directory scanning functionality
//!
//! This module walks the input root and collects the files a job will process.

use std::fs::symlink_metadata;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern, glob_with};

use crate::constants::{RECURSIVE_WILDCARD, WILDCARD};
use crate::errors::{Result, file_operation_error, glob_pattern_error, invalid_filename_error};
use crate::logging::JobLogger;

/// Sorted list of files selected for processing
pub type FileList = Vec<PathBuf>;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Builds the recursive glob pattern for an input root and optional chunk
///
/// Both the root and the chunk are escaped, so glob metacharacters in either
/// are matched literally. The chunk applies to the file name only; an empty
/// chunk is contained in every name and selects everything.
pub fn discovery_pattern(root: &Path, chunk: Option<&str>) -> Result<String> {
    let root_str = root
        .to_str()
        .ok_or_else(|| invalid_filename_error(root.to_path_buf()))?;

    // "**" as a final component only matches directories
    let file_pattern = match chunk.filter(|chunk| !chunk.is_empty()) {
        Some(chunk) => format!("{WILDCARD}{}{WILDCARD}", Pattern::escape(chunk)),
        None => WILDCARD.to_string(),
    };

    let pattern = PathBuf::from(Pattern::escape(root_str))
        .join(RECURSIVE_WILDCARD)
        .join(file_pattern);

    pattern
        .to_str()
        .map(str::to_string)
        .ok_or_else(|| invalid_filename_error(pattern.clone()))
}

/// Scans `root` recursively for regular files and symbolic links
///
/// A root that does not exist yields an empty list. Subdirectories that
/// cannot be read are skipped with a warning. The result is sorted by the
/// full path string.
///
/// # Errors
/// Returns an error if the root cannot be made absolute or is not valid unicode
pub fn scan_input_root<L: JobLogger>(
    root: &Path,
    chunk: Option<&str>,
    logger: &L,
) -> Result<FileList> {
    let root = std::path::absolute(root)
        .map_err(|e| file_operation_error(e, root.to_path_buf(), "resolve"))?;
    let pattern = discovery_pattern(&root, chunk)?;

    let entries = glob_with(&pattern, MATCH_OPTIONS).map_err(|e| glob_pattern_error(e, &pattern))?;

    let mut files: FileList = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if is_file_or_symlink(&path) && !is_hidden_below(&root, &path) => {
                files.push(path)
            }
            Ok(_) => {}
            Err(e) => logger.warn(&format!(
                "Skipping unreadable path {}: {}",
                e.path().display(),
                e.error()
            )),
        }
    }

    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    Ok(files)
}

/// Any dot-named component between `root` and `path`
fn is_hidden_below(root: &Path, path: &Path) -> bool {
    path.strip_prefix(root)
        .map(|relative| {
            relative
                .components()
                .any(|component| component.as_os_str().as_encoded_bytes().starts_with(b"."))
        })
        .unwrap_or(false)
}

/// Regular files and links qualify, whatever a link points at
fn is_file_or_symlink(path: &Path) -> bool {
    symlink_metadata(path)
        .map(|metadata| metadata.is_file() || metadata.file_type().is_symlink())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_discovery_pattern_without_chunk() {
        let pattern = discovery_pattern(Path::new("/data/OnixEphys"), None).unwrap();
        assert_eq!(pattern, "/data/OnixEphys/**/*");
    }

    #[cfg(unix)]
    #[test]
    fn test_discovery_pattern_with_chunk() {
        let pattern =
            discovery_pattern(Path::new("/data/OnixEphys"), Some("2025-01-31T19-00-00")).unwrap();
        assert_eq!(pattern, "/data/OnixEphys/**/*2025-01-31T19-00-00*");
    }

    #[cfg(unix)]
    #[test]
    fn test_discovery_pattern_with_empty_chunk_matches_all_files() {
        let pattern = discovery_pattern(Path::new("/data/OnixEphys"), Some("")).unwrap();
        assert_eq!(pattern, "/data/OnixEphys/**/*");
    }

    #[cfg(unix)]
    #[test]
    fn test_discovery_pattern_escapes_metacharacters() {
        let pattern = discovery_pattern(Path::new("/data/run[1]"), Some("a*b")).unwrap();
        assert_eq!(pattern, "/data/run[[]1[]]/**/*a[*]b*");
    }

    #[test]
    fn test_is_hidden_below_ignores_hidden_root() {
        let root = Path::new("/tmp/.tmpAbC/input");
        assert!(!is_hidden_below(root, &root.join("a/b.bin")));
        assert!(is_hidden_below(root, &root.join(".cache/b.bin")));
        assert!(is_hidden_below(root, &root.join("a/.b.bin")));
    }

    #[cfg(unix)]
    #[test]
    fn test_discovery_pattern_tolerates_trailing_separator() {
        let pattern = discovery_pattern(Path::new("/data/OnixEphys/"), None).unwrap();
        assert_eq!(pattern, "/data/OnixEphys/**/*");
    }
}
