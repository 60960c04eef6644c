//! Tutor configuration system.
//!
//! Provides TOML-based configuration with validation. All config sections
//! use sensible defaults so partial configs work out of the box. API keys
//! are never read from or written to the config file.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tutor_config::{load_config, validation};
//!
//! let mut config = load_config().expect("failed to load config");
//! if let Some(e) = validation::repair(&mut config) {
//!     eprintln!("invalid values reset to defaults: {e}");
//! }
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{TutorConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use tutor_common::ConfigError;

/// Load config from the platform default path, creating it if absent.
pub fn load_config() -> Result<TutorConfig, ConfigError> {
    toml_loader::load_default()
}

/// Load config from an explicit path (`--config`).
pub fn load_config_from(path: &Path) -> Result<TutorConfig, ConfigError> {
    toml_loader::load_from_path(path)
}
