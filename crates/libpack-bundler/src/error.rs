//! Error types for libpack build operations.

use std::path::PathBuf;

/// Errors produced while building a library bundle.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Entry point file doesn't exist.
    #[error("Entry point not found: {}", .0.display())]
    EntryNotFound(PathBuf),

    /// The entry module failed to parse.
    #[error("Failed to parse {file}: {message}")]
    Parse {
        /// File that failed to parse
        file: PathBuf,
        /// Joined parser diagnostics
        message: String,
    },

    /// TypeScript type stripping failed.
    #[error("Failed to transform {file}: {message}")]
    Transform {
        /// File that failed to transform
        file: PathBuf,
        /// Joined transformer diagnostics
        message: String,
    },

    /// Declaration generation failed for an input file.
    #[error("Failed to generate declarations for {file}: {message}")]
    Declarations {
        /// File that failed declaration extraction
        file: PathBuf,
        /// Joined isolated-declarations diagnostics
        message: String,
    },

    /// package.json could not be read or parsed.
    #[error("Invalid package manifest: {0}")]
    Manifest(String),

    /// An output filename escapes the output directory.
    #[error("Invalid output path: {0}")]
    InvalidOutputPath(String),

    /// Writing an artifact to disk failed.
    #[error("Write failure: {0}")]
    WriteFailure(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for libpack operations.
pub type Result<T> = std::result::Result<T, Error>;
