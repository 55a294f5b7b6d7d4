//! Configuration module
//!
//! Loads optional md2text.toml files and resolves the render settings.
//! Defines Config and ColorMode.

mod types;

pub use types::{ColorMode, Config};

use crate::error::{Md2TextError, Result};
use std::fs;
use std::path::Path;

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        Md2TextError::Config(format!(
            "Cannot read config from '{}': {}",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Reject widths no line could fit in
pub fn validate_width(width: usize) -> Result<usize> {
    if width == 0 {
        return Err(Md2TextError::Config(
            "width must be at least 1 column".to_string(),
        ));
    }
    Ok(width)
}
