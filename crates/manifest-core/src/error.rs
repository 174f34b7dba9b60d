//! Error types for manifest-core

use std::path::PathBuf;

/// Result type for manifest-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating a manifest.
///
/// All variants are fatal to the generation pipeline; cleanup failures are
/// reported per-path by [`crate::clean`] instead of through this enum.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Template file not found: {path}")]
    TemplateNotFound { path: PathBuf },

    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Missing required property '{field}'")]
    MissingRequiredField { field: &'static str },

    #[error("Unable to format results: {message}")]
    InvalidResultsShape { message: String },

    #[error("Invalid result '{category}': {message} (entry {index})")]
    InvalidResultEntry {
        category: String,
        /// 1-based position of the offending entry within its category.
        index: usize,
        message: String,
    },

    #[error("Template substitution error: {message}")]
    Substitution { message: String },

    #[error("Failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn shape(message: impl Into<String>) -> Self {
        Self::InvalidResultsShape {
            message: message.into(),
        }
    }
}
