//! Unified error type for cardgen.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating placeholder files.
#[derive(Debug, Error)]
pub enum CardgenError {
    /// The output directory could not be created.
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying filesystem error.
        source: std::io::Error,
    },

    /// A placeholder image could not be encoded or written.
    #[error("Failed to write placeholder {}: {source}", path.display())]
    WriteImage {
        /// The destination file path.
        path: PathBuf,
        /// The underlying imaging error.
        source: image::ImageError,
    },

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),
}
