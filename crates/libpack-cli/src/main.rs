//! libpack CLI - TypeScript library builds with Rust performance.
//!
//! This is the main entry point for the libpack CLI. It handles
//! command-line argument parsing, logging initialization, and command
//! dispatch.

use clap::Parser;
use libpack_cli::{cli, commands, error, logger, ui};
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    // Execute the appropriate command
    let result = match args.command {
        cli::Command::Build(build_args) => commands::build_execute(build_args).await,
    };

    // Convert CLI errors to miette diagnostics for readable error reporting
    result.map_err(error::cli_error_to_miette)
}
