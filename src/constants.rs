/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Wildcard character used in discovery glob patterns
pub const WILDCARD: &str = "*";

/// Recursive wildcard used to descend through every subdirectory
pub const RECURSIVE_WILDCARD: &str = "**";

/// Literal inserted between a file's stem and its extension
pub const TRANSFORMED_SUFFIX: &str = "_transformed";

/// Status code reported by a job that ran to completion
pub const STATUS_OK: u16 = 200;

/// Environment variable holding the input root
pub const ENV_INPUT_SOURCE: &str = "TRANSFORMATION_JOB_INPUT_SOURCE";

/// Environment variable holding the output root
pub const ENV_OUTPUT_DIRECTORY: &str = "TRANSFORMATION_JOB_OUTPUT_DIRECTORY";

/// Environment variable holding the optional chunk filter
pub const ENV_CHUNK: &str = "TRANSFORMATION_JOB_CHUNK";

/// Environment variable holding the optional pass-through parameter
pub const ENV_EXTRA_PARAM: &str = "TRANSFORMATION_JOB_EXTRA_PARAM";

/// Environment variable selecting the log verbosity
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Log level used when `LOG_LEVEL` is unset
pub const LOG_LEVEL_DEFAULT: &str = "INFO";

/// Help text for the job settings command-line option
pub const JOB_SETTINGS_HELP: &str =
    "Job settings as a JSON object; settings are read from TRANSFORMATION_JOB_* variables otherwise";
