//! Build configuration and orchestration.
//!
//! `BuildOptions` is the single parameterized build routine: one entry
//! module, one target, one output directory. `build()` runs the steps
//! strictly in order (compile, aggregate declarations, write) and aborts on
//! the first error. Both the bundle and the declaration fragments are
//! produced entirely in memory before anything touches disk, so a failed
//! build writes nothing.

use std::path::{Path, PathBuf};

use crate::compile::{compile_module, CompiledBundle};
use crate::dts::{generate_declaration_fragments, DtsSource};
use crate::output::{write_artifacts, WrittenArtifacts};
use crate::package_json::PackageJson;
use crate::{BuildTarget, Error, MinifyLevel, Result};

/// Configuration for one library build.
///
/// # Example
///
/// ```no_run
/// use libpack_bundler::BuildOptions;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let result = BuildOptions::new("./src/index.ts")
///     .manifest("./package.json")
///     .sourcemap(true)
///     .build()
///     .await?;
///
/// result.write_to_target_dir()?;
/// # Ok(()) }
/// ```
#[derive(Debug, Clone)]
pub struct BuildOptions {
    entry: PathBuf,
    outdir: Option<PathBuf>,
    target: BuildTarget,
    minify: MinifyLevel,
    sourcemap: bool,
    external: Vec<String>,
    manifest: Option<PathBuf>,
    include_peer: bool,
    strip_internal: bool,
}

impl BuildOptions {
    /// Build configuration for the given entry module with the defaults the
    /// tool ships with: browser target, full minification, external source
    /// map.
    pub fn new(entry: impl Into<PathBuf>) -> Self {
        Self {
            entry: entry.into(),
            outdir: None,
            target: BuildTarget::default(),
            minify: MinifyLevel::default(),
            sourcemap: true,
            external: Vec::new(),
            manifest: None,
            include_peer: false,
            strip_internal: false,
        }
    }

    /// Override the output directory (default: the target's conventional
    /// directory, `dist/` for browser and `node/` for node).
    pub fn outdir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.outdir = Some(dir.into());
        self
    }

    /// Set the build target.
    pub fn target(mut self, target: BuildTarget) -> Self {
        self.target = target;
        self
    }

    /// Set the minification level.
    pub fn minify(mut self, level: MinifyLevel) -> Self {
        self.minify = level;
        self
    }

    /// Set the minification level from a string (`none`, `whitespace`,
    /// `syntax`, `identifiers`).
    ///
    /// # Errors
    ///
    /// Returns an error for unrecognized values.
    pub fn minify_level(mut self, level: &str) -> Result<Self> {
        self.minify = MinifyLevel::parse(level)?;
        Ok(self)
    }

    /// Enable or disable external source-map generation.
    pub fn sourcemap(mut self, enabled: bool) -> Self {
        self.sourcemap = enabled;
        self
    }

    /// Add packages to externalize, on top of anything read from the
    /// manifest.
    pub fn external<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.external.extend(names.into_iter().map(Into::into));
        self
    }

    /// Read the external-dependency allow-list from this package.json.
    pub fn manifest(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest = Some(path.into());
        self
    }

    /// Also externalize `peerDependencies` from the manifest.
    pub fn include_peer_dependencies(mut self, include: bool) -> Self {
        self.include_peer = include;
        self
    }

    /// Strip `@internal` declarations from the generated `.d.ts`.
    pub fn strip_internal(mut self, strip: bool) -> Self {
        self.strip_internal = strip;
        self
    }

    /// The output directory this build will write to.
    pub fn resolved_outdir(&self) -> &Path {
        self.outdir
            .as_deref()
            .unwrap_or_else(|| self.target.default_outdir())
    }

    /// Run the build: compile the entry module, then aggregate its type
    /// declarations.
    ///
    /// Nothing is written to disk; call [`BuildResult::write_to`] (or
    /// [`BuildResult::write_to_target_dir`]) to persist the artifacts.
    ///
    /// # Errors
    ///
    /// Fails if the entry module cannot be read, parsed, or transformed, if
    /// declaration extraction fails, or if the manifest is invalid. The
    /// first error aborts the build.
    pub async fn build(self) -> Result<BuildResult> {
        let mut externals = self.external.clone();
        if let Some(manifest_path) = &self.manifest {
            let manifest = PackageJson::from_path(manifest_path).await?;
            externals.extend(manifest.external_names(self.include_peer));
        }
        externals.sort();
        externals.dedup();

        tracing::debug!(
            entry = %self.entry.display(),
            target = %self.target,
            externals = externals.len(),
            "starting build"
        );

        let source = tokio::fs::read_to_string(&self.entry).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::EntryNotFound(self.entry.clone())
            } else {
                Error::Io(e)
            }
        })?;

        let bundle = compile_module(&source, &self.entry, self.minify, self.sourcemap)?;
        tracing::debug!(bytes = bundle.code.len(), "compiled entry module");

        let dts_sources = [DtsSource::new(&self.entry)];
        let declarations = generate_declaration_fragments(&dts_sources, self.strip_internal)?;
        tracing::debug!(fragments = declarations.len(), "aggregated declarations");

        let stem = self
            .entry
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("index")
            .to_string();

        Ok(BuildResult {
            bundle,
            declarations,
            externals,
            outdir: self.resolved_outdir().to_path_buf(),
            target: self.target,
            stem,
        })
    }
}

/// In-memory result of a successful build.
#[derive(Debug, Clone)]
pub struct BuildResult {
    /// Compiled bundle (code plus optional source map).
    pub bundle: CompiledBundle,
    /// Declaration fragments, one per input file, in input order.
    pub declarations: Vec<String>,
    /// Package names excluded from the bundle.
    pub externals: Vec<String>,
    /// Output directory resolved from target/options.
    pub outdir: PathBuf,
    /// Target this build was compiled for.
    pub target: BuildTarget,
    /// Entry file stem, used for artifact naming.
    stem: String,
}

impl BuildResult {
    /// The consolidated declaration text: fragments joined with newline
    /// separators.
    pub fn declaration_text(&self) -> String {
        self.declarations.join("\n")
    }

    /// Write artifacts into the directory resolved at build time.
    pub fn write_to_target_dir(&self) -> Result<WrittenArtifacts> {
        let outdir = self.outdir.clone();
        self.write_to(&outdir)
    }

    /// Write artifacts into `dir`, creating it (and any missing parents) if
    /// absent.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be created or any artifact cannot be
    /// written; partially written temp files are rolled back.
    pub fn write_to(&self, dir: &Path) -> Result<WrittenArtifacts> {
        write_artifacts(&self.bundle, &self.declarations, dir, &self.stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = BuildOptions::new("./src/index.ts");
        assert_eq!(options.target, BuildTarget::Browser);
        assert_eq!(options.minify, MinifyLevel::Identifiers);
        assert!(options.sourcemap);
        assert_eq!(options.resolved_outdir(), Path::new("dist"));
    }

    #[test]
    fn test_node_target_outdir() {
        let options = BuildOptions::new("./src/index.ts").target(BuildTarget::Node);
        assert_eq!(options.resolved_outdir(), Path::new("node"));
    }

    #[test]
    fn test_explicit_outdir_wins() {
        let options = BuildOptions::new("./src/index.ts")
            .target(BuildTarget::Node)
            .outdir("out");
        assert_eq!(options.resolved_outdir(), Path::new("out"));
    }

    #[test]
    fn test_minify_level_string() {
        let options = BuildOptions::new("x.ts").minify_level("none").unwrap();
        assert_eq!(options.minify, MinifyLevel::None);
        assert!(BuildOptions::new("x.ts").minify_level("bogus").is_err());
    }

    #[tokio::test]
    async fn test_missing_entry_fails() {
        let err = BuildOptions::new("/nonexistent/index.ts")
            .build()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::EntryNotFound(_)));
    }
}
