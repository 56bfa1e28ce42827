//! # libpack-bundler
//!
//! Single-entry library builds on the OXC toolchain: compile a TypeScript
//! entry module to a minified ES-module bundle with an external source map,
//! and aggregate its exported type surface into one declaration file.
//!
//! Declared dependencies (read from `package.json`) are treated as
//! external: the bundle never inlines them, the loading environment
//! resolves them at runtime.
//!
//! ## Quick Start
//!
//! ```no_run
//! use libpack_bundler::{BuildOptions, BuildTarget};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let result = BuildOptions::new("./src/index.ts")
//!     .manifest("./package.json")
//!     .target(BuildTarget::Browser)
//!     .build()
//!     .await?;
//!
//! let artifacts = result.write_to_target_dir()?;
//! println!("bundle at {}", artifacts.bundle.display());
//! # Ok(()) }
//! ```

pub mod compile;
pub mod dts;
pub mod error;
pub mod minify;
pub mod options;
pub mod output;
pub mod package_json;
pub mod target;

pub use compile::CompiledBundle;
pub use dts::{generate_declaration_fragments, DtsSource};
pub use error::{Error, Result};
pub use minify::MinifyLevel;
pub use options::{BuildOptions, BuildResult};
pub use output::{WrittenArtifacts, DECLARATION_FILENAME};
pub use package_json::{extract_package_name, is_external, PackageJson};
pub use target::BuildTarget;
