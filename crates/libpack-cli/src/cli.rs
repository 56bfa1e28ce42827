//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use libpack_bundler::BuildTarget;
use std::path::PathBuf;

/// Build TypeScript libraries into browser bundles with aggregated
/// declarations.
#[derive(Parser, Debug)]
#[command(name = "libpack", version, about, long_about = None)]
pub struct Cli {
    /// Enable debug-level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available libpack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a library entry into a bundle plus a declaration file
    ///
    /// Compiles the entry module into a minified ES-module bundle with an
    /// external source map, and aggregates its exported type surface into
    /// a single index.d.ts next to the bundle.
    Build(BuildArgs),
}

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Entry point to compile
    #[arg(value_name = "ENTRY", default_value = "./src/index.ts")]
    pub entry: PathBuf,

    /// Output directory for generated files
    ///
    /// Defaults to the target's conventional directory: dist/ for browser,
    /// node/ for node. Created if it doesn't exist.
    #[arg(short = 'd', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Environment the bundle will run in
    #[arg(short = 't', long, value_enum, default_value = "browser")]
    pub target: Target,

    /// Minification level (none, whitespace, syntax, identifiers)
    #[arg(long, default_value = "identifiers", value_name = "LEVEL")]
    pub minify: String,

    /// Disable external source-map generation
    #[arg(long)]
    pub no_sourcemap: bool,

    /// package.json supplying the external-dependency allow-list
    #[arg(long, default_value = "./package.json", value_name = "FILE")]
    pub manifest: PathBuf,

    /// Also externalize peerDependencies from the manifest
    #[arg(long)]
    pub include_peer: bool,

    /// Additional packages to externalize
    #[arg(long, value_name = "PKG")]
    pub external: Vec<String>,

    /// Strip @internal declarations from the generated .d.ts
    #[arg(long)]
    pub strip_internal: bool,
}

/// Build target selection.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Web browser (output to dist/)
    Browser,
    /// Node.js (output to node/)
    Node,
}

impl From<Target> for BuildTarget {
    fn from(target: Target) -> Self {
        match target {
            Target::Browser => BuildTarget::Browser,
            Target::Node => BuildTarget::Node,
        }
    }
}
