//! Build command implementation.
//!
//! Runs the build steps strictly in order: compile the entry module,
//! aggregate its type declarations, then write the bundle, the external
//! source map, and `index.d.ts` into the output directory. Any failure
//! aborts the command and surfaces as a non-zero exit.

use std::time::Instant;

use libpack_bundler::{BuildOptions, BuildTarget};

use crate::cli::BuildArgs;
use crate::error::Result;
use crate::ui;

/// Execute the build command.
///
/// # Errors
///
/// Returns errors for a missing/unparsable entry module, an invalid
/// manifest, declaration-extraction failures, and file system errors.
pub async fn execute(args: BuildArgs) -> Result<()> {
    let start_time = Instant::now();
    let target = BuildTarget::from(args.target);

    ui::info(&format!("Building {}", args.entry.display()));
    ui::info(&format!("Target: {}", target));

    let mut options = BuildOptions::new(&args.entry)
        .target(target)
        .manifest(&args.manifest)
        .include_peer_dependencies(args.include_peer)
        .sourcemap(!args.no_sourcemap)
        .strip_internal(args.strip_internal)
        .external(args.external.iter().cloned())
        .minify_level(&args.minify)?;

    if let Some(out_dir) = &args.out_dir {
        options = options.outdir(out_dir);
    }
    ui::info(&format!(
        "Output: {}",
        options.resolved_outdir().display()
    ));

    let result = options.build().await?;
    ui::success(&format!(
        "Compiled entry module ({})",
        ui::format_size(result.bundle.code.len())
    ));
    if !result.externals.is_empty() {
        tracing::debug!(externals = ?result.externals, "externalized packages");
    }

    ui::info("Writing type declarations...");
    let artifacts = result.write_to_target_dir()?;
    tracing::debug!(
        bundle = %artifacts.bundle.display(),
        declarations = %artifacts.declarations.display(),
        "artifacts written"
    );

    ui::success(&format!(
        "Build completed in {}",
        ui::format_duration(start_time.elapsed())
    ));

    Ok(())
}
