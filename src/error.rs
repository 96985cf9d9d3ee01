// Error types for the guide

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when a navigation target cannot be turned into a location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("navigation target is empty")]
    EmptyTarget,

    #[error("navigation target must be an absolute path: {0}")]
    RelativeTarget(String),

    #[error("navigation target contains whitespace: {0:?}")]
    InvalidCharacter(String),
}

/// Errors raised while loading the embedded comparison content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse content file {name}: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: toml::de::Error,
    },

    #[error("content file {name} has no records")]
    Empty { name: &'static str },
}

/// Errors raised while reading or writing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Errors raised while loading a fallback font file.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a usable font", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: ab_glyph::InvalidFont,
    },
}
