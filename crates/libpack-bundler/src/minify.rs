//! Minification level configuration.
//!
//! Provides granular control over JavaScript minification using a
//! string-based API for CLI compatibility.

use oxc_minifier::{CompressOptions, MangleOptions, MinifierOptions};

use crate::{Error, Result};

/// Validated minification level.
///
/// Controls how aggressively the emitted bundle is minified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MinifyLevel {
    /// No minification - output readable code.
    None,
    /// Remove whitespace and comments only.
    Whitespace,
    /// Syntax-level optimizations (identifiers preserved).
    Syntax,
    /// Full minification including identifier mangling.
    #[default]
    Identifiers,
}

impl MinifyLevel {
    /// Parse a minification level from a string.
    ///
    /// Accepts `none`, `whitespace`, `syntax`, `identifiers` plus the
    /// boolean aliases `false`/`true`, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error for unrecognized values.
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "none" | "false" => Ok(Self::None),
            "whitespace" => Ok(Self::Whitespace),
            "syntax" => Ok(Self::Syntax),
            "identifiers" | "true" => Ok(Self::Identifiers),
            _ => Err(Error::InvalidConfig(format!(
                "Invalid minify level: '{}'. Expected: none, whitespace, syntax, identifiers",
                s
            ))),
        }
    }

    /// Returns true if any minification is enabled.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Convert to oxc minifier options.
    ///
    /// `None` and `Whitespace` skip the minifier pass entirely; whitespace
    /// reduction happens in the code generator.
    pub(crate) fn to_minifier_options(self) -> Option<MinifierOptions> {
        match self {
            Self::None | Self::Whitespace => None,
            Self::Syntax => Some(MinifierOptions {
                mangle: None,
                compress: Some(CompressOptions::default()),
            }),
            Self::Identifiers => Some(MinifierOptions {
                mangle: Some(MangleOptions::default()),
                compress: Some(CompressOptions::default()),
            }),
        }
    }
}

impl std::fmt::Display for MinifyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Whitespace => write!(f, "whitespace"),
            Self::Syntax => write!(f, "syntax"),
            Self::Identifiers => write!(f, "identifiers"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_levels() {
        assert_eq!(MinifyLevel::parse("none").unwrap(), MinifyLevel::None);
        assert_eq!(
            MinifyLevel::parse("whitespace").unwrap(),
            MinifyLevel::Whitespace
        );
        assert_eq!(MinifyLevel::parse("syntax").unwrap(), MinifyLevel::Syntax);
        assert_eq!(
            MinifyLevel::parse("identifiers").unwrap(),
            MinifyLevel::Identifiers
        );
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(MinifyLevel::parse("NONE").unwrap(), MinifyLevel::None);
        assert_eq!(
            MinifyLevel::parse("IDENTIFIERS").unwrap(),
            MinifyLevel::Identifiers
        );
    }

    #[test]
    fn test_parse_bool_compat() {
        assert_eq!(
            MinifyLevel::parse("true").unwrap(),
            MinifyLevel::Identifiers
        );
        assert_eq!(MinifyLevel::parse("false").unwrap(), MinifyLevel::None);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(MinifyLevel::parse("invalid").is_err());
        assert!(MinifyLevel::parse("").is_err());
    }

    #[test]
    fn test_is_enabled() {
        assert!(!MinifyLevel::None.is_enabled());
        assert!(MinifyLevel::Whitespace.is_enabled());
        assert!(MinifyLevel::Identifiers.is_enabled());
    }

    #[test]
    fn test_to_minifier_options() {
        assert!(MinifyLevel::None.to_minifier_options().is_none());
        assert!(MinifyLevel::Whitespace.to_minifier_options().is_none());

        let syntax = MinifyLevel::Syntax.to_minifier_options().unwrap();
        assert!(syntax.mangle.is_none());
        assert!(syntax.compress.is_some());

        let full = MinifyLevel::Identifiers.to_minifier_options().unwrap();
        assert!(full.mangle.is_some());
        assert!(full.compress.is_some());
    }
}
