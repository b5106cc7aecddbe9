//! # Pipeline errors
//!
//! Only infrastructure problems are errors. Linguistic edge cases (an unmapped
//! tag, a word missing from the lexicon) are resolved by documented fallbacks
//! inside the stages and never surface here.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for prep-core operations.
pub type Result<T> = std::result::Result<T, PrepError>;

/// Error type for model loading and configuration.
#[derive(Error, Debug)]
pub enum PrepError {
    /// A configured resource file or directory could not be read.
    #[error("{resource} unavailable at {}: {source}", path.display())]
    ResourceUnavailable {
        resource: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A resource file was readable but a line could not be parsed.
    #[error("malformed {resource} at {}:{line}: {reason}", path.display())]
    MalformedResource {
        resource: &'static str,
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// The TOML configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl PrepError {
    pub(crate) fn unavailable(resource: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PrepError::ResourceUnavailable {
            resource,
            path: path.into(),
            source,
        }
    }
}
