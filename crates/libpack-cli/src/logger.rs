//! Logging infrastructure for the libpack CLI.
//!
//! Structured logging via the `tracing` ecosystem with verbosity control
//! (`--verbose` for debug, `--quiet` for errors only), color handling, and
//! `RUST_LOG` overrides.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at program start, before any logging occurs. The level is
/// determined in this order: `--verbose` (debug for libpack crates),
/// `--quiet` (errors only), `RUST_LOG`, then the info-level default.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("libpack_bundler=debug,libpack_cli=debug")
    } else if quiet {
        EnvFilter::new("libpack_bundler=error,libpack_cli=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("libpack_bundler=info,libpack_cli=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Check if colored output should be enabled.
///
/// Honors the `NO_COLOR` and `FORCE_COLOR` conventions, then falls back to
/// terminal capability detection.
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::Term::stdout().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;

    // tracing is global and can only be initialized once per process, so
    // these verify filter construction rather than actual output.

    #[test]
    fn test_env_filter_verbose() {
        let _filter = EnvFilter::new("libpack_bundler=debug,libpack_cli=debug");
    }

    #[test]
    fn test_env_filter_quiet() {
        let _filter = EnvFilter::new("libpack_bundler=error,libpack_cli=error");
    }
}
