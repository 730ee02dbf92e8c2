// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::ConfigFile;
use crate::config::validate::validate_config;
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw
/// [`ConfigFile`].
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (row sanity, target bounds). Use [`load_and_validate`] for
/// that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let contents = fs::read_to_string(path.as_ref())?;
    let config: ConfigFile = toml::from_str(&contents)?;
    Ok(config)
}

/// Load a configuration file from path and run validation.
///
/// This is the entry point the rest of the application uses: it reads TOML,
/// applies defaults (handled by `serde` + `Default` impls), and checks that
/// the batch makes sense before anything runs.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let config = load_from_path(&path)?;
    validate_config(&config)?;
    Ok(config)
}

/// Default config path: `Simdag.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Simdag.toml")
}
