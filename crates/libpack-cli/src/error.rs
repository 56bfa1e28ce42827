//! Error handling for the libpack CLI.
//!
//! `CliError` wraps bundler errors and CLI-specific failures; at the
//! process boundary everything is converted to a miette [`Report`] for
//! readable terminal diagnostics.

use miette::Report;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Build process errors from the bundler library
    #[error("Build error: {0}")]
    Build(#[from] libpack_bundler::Error),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert CliError to a miette Report.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Build(libpack_bundler::Error::EntryNotFound(path)) => miette::miette!(
            "Entry point not found: {}\n\nHint: Check the ENTRY argument or create the file",
            path.display()
        ),
        CliError::Build(libpack_bundler::Error::Manifest(msg)) => miette::miette!(
            "{}\n\nHint: Point --manifest at a valid package.json",
            msg
        ),
        CliError::Build(libpack_bundler::Error::Parse { file, message }) => miette::miette!(
            "Failed to parse {}:\n{}",
            file.display(),
            message
        ),
        _ => miette::miette!("{}", err),
    }
}
