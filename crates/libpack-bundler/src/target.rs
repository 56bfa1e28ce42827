//! Build target types.
//!
//! The target is an explicit configuration value driving one parameterized
//! build routine. Each target carries its conventional output directory, so
//! a browser build and a node build of the same entry never collide.

use std::path::Path;

use crate::{Error, Result};

/// Environment the emitted bundle will execute in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildTarget {
    /// Web browser (default)
    #[default]
    Browser,
    /// Node.js
    Node,
}

impl BuildTarget {
    /// Parse a build target from a string.
    ///
    /// Accepts `"browser"` and `"node"`, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error for unrecognized values.
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "browser" => Ok(Self::Browser),
            "node" => Ok(Self::Node),
            _ => Err(Error::InvalidConfig(format!(
                "Invalid build target: '{}'. Expected: browser, node",
                s
            ))),
        }
    }

    /// Stable identifier for this target.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Node => "node",
        }
    }

    /// Conventional output directory for this target.
    ///
    /// Browser bundles go to `dist/`, node bundles to `node/`.
    pub fn default_outdir(&self) -> &'static Path {
        match self {
            Self::Browser => Path::new("dist"),
            Self::Node => Path::new("node"),
        }
    }
}

impl std::fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_targets() {
        assert_eq!(BuildTarget::parse("browser").unwrap(), BuildTarget::Browser);
        assert_eq!(BuildTarget::parse("node").unwrap(), BuildTarget::Node);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(BuildTarget::parse("Browser").unwrap(), BuildTarget::Browser);
        assert_eq!(BuildTarget::parse("NODE").unwrap(), BuildTarget::Node);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(BuildTarget::parse("deno").is_err());
        assert!(BuildTarget::parse("").is_err());
    }

    #[test]
    fn test_default_outdir() {
        assert_eq!(BuildTarget::Browser.default_outdir(), Path::new("dist"));
        assert_eq!(BuildTarget::Node.default_outdir(), Path::new("node"));
    }

    #[test]
    fn test_display() {
        assert_eq!(BuildTarget::Browser.to_string(), "browser");
        assert_eq!(BuildTarget::Node.to_string(), "node");
    }
}
