//! Configuration module
//!
//! This module contains the job settings model and the sources it is loaded from.

mod loader;
mod model;

pub use loader::SettingsSource;
pub use model::JobSettings;
