use std::path::PathBuf;

use thiserror::Error;

/// md2text error types
#[derive(Error, Debug)]
pub enum Md2TextError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot read '{}': {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type for md2text operations
pub type Result<T> = std::result::Result<T, Md2TextError>;
