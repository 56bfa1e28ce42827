//! package.json parsing for the external-dependency allow-list.
//!
//! Only the dependency name sets are consumed: declared packages are
//! excluded from the bundle and resolved by the loading environment at
//! runtime. Version constraints are parsed but never interpreted.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Maximum allowed size for package.json files (10MB)
const MAX_MANIFEST_SIZE: u64 = 10 * 1024 * 1024;

/// Parsed package.json structure.
///
/// Focuses on the dependency-related fields and omits scripts, engines, and
/// other metadata the build never reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageJson {
    /// Package name
    pub name: Option<String>,
    /// Package version
    pub version: Option<String>,
    /// Production dependencies
    #[serde(default)]
    pub dependencies: HashMap<String, String>,
    /// Peer dependencies
    #[serde(default, rename = "peerDependencies")]
    pub peer_dependencies: HashMap<String, String>,
    /// File path this was loaded from
    #[serde(skip)]
    pub path: PathBuf,
}

impl PackageJson {
    /// Load package.json from a specific path.
    ///
    /// # Errors
    ///
    /// Fails if the file is missing, oversized, not UTF-8, or not valid JSON.
    pub async fn from_path(path: &Path) -> Result<Self> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| Error::Manifest(format!("Cannot read {}: {}", path.display(), e)))?;

        if metadata.len() > MAX_MANIFEST_SIZE {
            return Err(Error::Manifest(format!(
                "package.json exceeds maximum size of {}MB",
                MAX_MANIFEST_SIZE / 1024 / 1024
            )));
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::Manifest(format!("Failed to read {}: {}", path.display(), e)))?;

        let mut pkg: PackageJson = serde_json::from_str(&content)
            .map_err(|e| Error::Manifest(format!("Invalid package.json format: {}", e)))?;

        pkg.path = path.to_path_buf();
        Ok(pkg)
    }

    /// Names of packages to externalize when bundling.
    ///
    /// Production dependencies always count; peer dependencies are opt-in.
    /// The result is sorted and deduplicated.
    pub fn external_names(&self, include_peer: bool) -> Vec<String> {
        let mut names: Vec<String> = self.dependencies.keys().cloned().collect();

        if include_peer {
            names.extend(self.peer_dependencies.keys().cloned());
        }

        names.sort();
        names.dedup();
        names
    }
}

/// Extract the base package name from an npm import specifier.
///
/// Handles scoped packages correctly:
/// - `@foo/bar` -> `@foo/bar`
/// - `@foo/bar/baz` -> `@foo/bar`
/// - `lodash` -> `lodash`
/// - `lodash/fp` -> `lodash`
pub fn extract_package_name(specifier: &str) -> &str {
    if specifier.is_empty() {
        return specifier;
    }

    // Scoped packages (@org/package)
    if specifier.starts_with('@') {
        if let Some(first_slash) = specifier.find('/') {
            if let Some(second_slash) = specifier[first_slash + 1..].find('/') {
                return &specifier[..first_slash + 1 + second_slash];
            }
        }
        return specifier;
    }

    // Non-scoped packages - take up to first slash
    if let Some(slash_idx) = specifier.find('/') {
        &specifier[..slash_idx]
    } else {
        specifier
    }
}

/// Check whether an import specifier matches a declared external package.
///
/// Sub-path imports (`lodash/fp`, `@scope/pkg/util`) match their base
/// package name.
pub fn is_external(specifier: &str, externals: &[String]) -> bool {
    let base = extract_package_name(specifier);
    externals.iter().any(|name| name == base)
}
