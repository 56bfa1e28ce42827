//! libpack CLI - TypeScript library builds with Rust performance.
//!
//! This crate provides the command-line interface for libpack, exposing
//! the `libpack-bundler` library through a small CLI with structured
//! logging and readable error messages.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - individual CLI command implementations
//! - [`error`] - error types and miette conversion
//! - [`logger`] - structured logging with tracing
//! - [`ui`] - terminal status messages and formatting

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
