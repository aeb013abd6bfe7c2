//! Configuration module for Tally
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings (category registry, currency symbol, entry defaults)

pub mod paths;
pub mod settings;

pub use paths::TallyPaths;
pub use settings::Settings;
