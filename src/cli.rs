use clap::{Arg, ArgMatches, Command, command, crate_authors, crate_description, crate_name, crate_version};

use crate::config::SettingsSource;
use crate::constants::JOB_SETTINGS_HELP;

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `job_settings`: Explicit job settings as a JSON object
/// - `passthrough`: Hidden catch-all for arguments the job does not know
pub fn build_command() -> Command {
    // define arg for explicit job settings
    let arg_job_settings = Arg::new("job_settings")
        .long("job-settings")
        .value_name("JSON")
        .help(JOB_SETTINGS_HELP)
        .num_args(1);

    // anything else lands here so that unknown arguments fall back to the environment
    let arg_passthrough = Arg::new("passthrough")
        .num_args(0..)
        .trailing_var_arg(true)
        .allow_hyphen_values(true)
        .hide(true);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_job_settings)
        .arg(arg_passthrough)
}

/// Parses the process arguments
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Decides where the job settings come from
///
/// Only `--job-settings <json>` on its own selects explicit settings; any other
/// argument list falls back to the environment.
///
/// # Examples
/// ```
/// # use chunked_transform::cli::{build_command, settings_source};
/// # use chunked_transform::config::SettingsSource;
/// let matches = build_command()
///     .try_get_matches_from(["chunked-transform"])
///     .unwrap();
/// assert_eq!(settings_source(&matches), SettingsSource::FromEnvironment);
/// ```
pub fn settings_source(matches: &ArgMatches) -> SettingsSource {
    let has_passthrough = matches
        .get_many::<String>("passthrough")
        .is_some_and(|mut values| values.next().is_some());

    match matches.get_one::<String>("job_settings") {
        Some(json) if !has_passthrough => SettingsSource::FromJson(json.as_bytes().to_vec()),
        _ => SettingsSource::FromEnvironment,
    }
}
