use anyhow::Result;
use human_panic::setup_panic;
use log::info;

use chunked_transform::cli::{get_matches, settings_source};
use chunked_transform::prelude::*;

fn main() -> Result<()> {
    setup_panic!();

    init_default_logger()?;

    let argument_matches = get_matches();
    let settings = JobSettings::load(settings_source(&argument_matches))?;

    let job = TransformationJob::new(settings);
    let response = job.run()?;

    info!("{}", response.message);

    Ok(())
}
