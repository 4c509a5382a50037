use std::env;
use std::path::Path;

use chunked_transform::prelude::*;

// Only this test touches the process environment, so it owns the variables.
#[test]
fn test_load_from_environment() {
    unsafe {
        env::set_var("TRANSFORMATION_JOB_INPUT_SOURCE", "/tests/resources");
        env::set_var("TRANSFORMATION_JOB_OUTPUT_DIRECTORY", "/tests/resources/output");
        env::set_var("TRANSFORMATION_JOB_CHUNK", "a");
        env::remove_var("TRANSFORMATION_JOB_EXTRA_PARAM");
    }

    let settings = JobSettings::load(SettingsSource::FromEnvironment).unwrap();

    assert_eq!(settings.input_source(), Path::new("/tests/resources"));
    assert_eq!(
        settings.output_directory(),
        Path::new("/tests/resources/output")
    );
    assert_eq!(settings.chunk(), Some("a"));
    assert!(settings.extra_param().is_none());

    unsafe {
        env::remove_var("TRANSFORMATION_JOB_INPUT_SOURCE");
    }

    let error = JobSettings::load(SettingsSource::FromEnvironment).unwrap_err();
    assert!(matches!(error, Error::MissingSetting { ref name } if name == "TRANSFORMATION_JOB_INPUT_SOURCE"));

    unsafe {
        env::remove_var("TRANSFORMATION_JOB_OUTPUT_DIRECTORY");
        env::remove_var("TRANSFORMATION_JOB_CHUNK");
    }
}

#[test]
fn test_load_from_json_blob() {
    let json = br#"{
        "input_source": "/data/OnixEphys",
        "output_directory": "/data/ephys",
        "chunk": "2025-01-31T19-00-00",
        "extra_param": "x"
    }"#;

    let settings = JobSettings::load(SettingsSource::FromJson(json.to_vec())).unwrap();

    assert_eq!(
        settings,
        JobSettings::new("/data/OnixEphys", "/data/ephys")
            .with_chunk("2025-01-31T19-00-00")
            .with_extra_param("x")
    );
}

#[test]
fn test_load_from_malformed_json() {
    let error = JobSettings::load(SettingsSource::FromJson(b"{not json".to_vec())).unwrap_err();
    assert!(format!("{error}").starts_with("Job settings parsing error"));
}
