//! Artifact writing for build output.
//!
//! The writer owns artifact naming and persistence: it creates the output
//! directory (recursively, idempotently), validates every output filename
//! against directory traversal, and writes all files atomically via temp
//! files and rename, rolling back temps if any write fails. Either the
//! whole artifact set lands on disk or none of it does.

use std::fs;
use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::compile::CompiledBundle;
use crate::{Error, Result};

/// Fixed name of the consolidated declaration file.
pub const DECLARATION_FILENAME: &str = "index.d.ts";

/// Paths of the artifacts a build wrote to disk.
#[derive(Debug, Clone)]
pub struct WrittenArtifacts {
    /// Compiled ES-module bundle.
    pub bundle: PathBuf,
    /// External source map, when enabled.
    pub sourcemap: Option<PathBuf>,
    /// Consolidated declaration file.
    pub declarations: PathBuf,
}

/// Write a compiled bundle and its declaration text into `dir`.
///
/// `stem` is the entry module's file stem; the bundle lands at
/// `<stem>.js`, the map at `<stem>.js.map`, the declarations at
/// [`DECLARATION_FILENAME`]. Declaration fragments are joined with newline
/// separators.
pub(crate) fn write_artifacts(
    bundle: &CompiledBundle,
    declaration_fragments: &[String],
    dir: &Path,
    stem: &str,
) -> Result<WrittenArtifacts> {
    let dir = validate_and_normalize_dir(dir)?;

    fs::create_dir_all(&dir).map_err(|e| {
        Error::WriteFailure(format!(
            "Failed to create output directory '{}': {}",
            dir.display(),
            e
        ))
    })?;

    let bundle_filename = format!("{}.js", stem);
    let map_filename = format!("{}.js.map", stem);

    let bundle_path = validate_output_path(&dir, &bundle_filename)?;
    let declarations_path = validate_output_path(&dir, DECLARATION_FILENAME)?;

    // The sourceMappingURL comment makes the external map discoverable.
    let code = match &bundle.map {
        Some(_) => format!(
            "{}\n//# sourceMappingURL={}\n",
            bundle.code.trim_end(),
            map_filename
        ),
        None => bundle.code.clone(),
    };
    let declaration_text = declaration_fragments.join("\n");

    let mut operations: Vec<(PathBuf, Vec<u8>)> = vec![
        (bundle_path.clone(), code.into_bytes()),
        (declarations_path.clone(), declaration_text.into_bytes()),
    ];

    let sourcemap_path = match &bundle.map {
        Some(map) => {
            let path = validate_output_path(&dir, &map_filename)?;
            operations.push((path.clone(), map.clone().into_bytes()));
            Some(path)
        }
        None => None,
    };

    write_files_atomic(&operations)?;

    Ok(WrittenArtifacts {
        bundle: bundle_path,
        sourcemap: sourcemap_path,
        declarations: declarations_path,
    })
}

/// Validates and normalizes a directory path.
fn validate_and_normalize_dir(dir: &Path) -> Result<PathBuf> {
    let cleaned = dir.clean();

    let absolute = if cleaned.is_absolute() {
        cleaned
    } else {
        std::env::current_dir()
            .map_err(|e| {
                Error::InvalidOutputPath(format!("Failed to get current directory: {}", e))
            })?
            .join(&cleaned)
            .clean()
    };

    Ok(absolute)
}

/// Validates an output path to prevent directory traversal.
///
/// Cleans the filename, joins it with the base directory, cleans again, and
/// checks the result is still under the base directory.
fn validate_output_path(base_dir: &Path, filename: &str) -> Result<PathBuf> {
    if filename.contains('\0') {
        return Err(Error::InvalidOutputPath(
            "Filename contains null byte".to_string(),
        ));
    }

    let filename_path = Path::new(filename).clean();
    let full_path = base_dir.join(&filename_path).clean();

    if !full_path.starts_with(base_dir) {
        return Err(Error::InvalidOutputPath(format!(
            "Path '{}' escapes output directory '{}' (resolved to '{}')",
            filename,
            base_dir.display(),
            full_path.display()
        )));
    }

    Ok(full_path)
}

/// Writes multiple files atomically with rollback on failure.
///
/// Two phases: write every payload to a `.tmp` sibling, then rename all
/// temps into place. A failure in either phase removes the temps already
/// written, so readers never observe a partial artifact set.
fn write_files_atomic(operations: &[(PathBuf, Vec<u8>)]) -> Result<()> {
    let mut temp_files = Vec::new();

    for (target_path, content) in operations {
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                cleanup_temp_files(&temp_files);
                Error::WriteFailure(format!(
                    "Failed to create directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        // Append rather than with_extension: replacing the last extension
        // collapses multi-dot names ("index.d.js" and "index.d.ts" would
        // share one temp path).
        let temp_path = {
            let mut name = target_path.as_os_str().to_os_string();
            name.push(".tmp");
            PathBuf::from(name)
        };
        fs::write(&temp_path, content).map_err(|e| {
            cleanup_temp_files(&temp_files);
            Error::WriteFailure(format!(
                "Failed to write temporary file '{}': {}",
                temp_path.display(),
                e
            ))
        })?;

        temp_files.push((temp_path, target_path.clone()));
    }

    for (temp_path, target_path) in &temp_files {
        fs::rename(temp_path, target_path).map_err(|e| {
            cleanup_temp_files(&temp_files);
            Error::WriteFailure(format!(
                "Failed to rename '{}' to '{}': {}",
                temp_path.display(),
                target_path.display(),
                e
            ))
        })?;
    }

    Ok(())
}

/// Best-effort cleanup of temp files on error.
fn cleanup_temp_files(temp_files: &[(PathBuf, PathBuf)]) {
    for (temp_path, _) in temp_files {
        if temp_path.exists() {
            if let Err(e) = fs::remove_file(temp_path) {
                tracing::warn!(
                    "Failed to clean up temporary file '{}': {}",
                    temp_path.display(),
                    e
                );
            }
        }
    }
}
