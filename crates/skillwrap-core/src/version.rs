//! Version discovery from a `package.json` at the skill folder root.

use std::path::Path;

use log::{info, warn};
use serde_json::Value;
use thiserror::Error;

/// Version used when `package.json` is absent, unreadable, or has no
/// `version` field.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Manifest file consulted for the skill version.
pub const VERSION_MANIFEST: &str = "package.json";

/// Why a version manifest could not be read.
#[derive(Debug, Error)]
pub enum VersionError {
    /// The manifest could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The manifest is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Discover the skill version from `<skill_dir>/package.json`.
///
/// Never fails: an absent file or missing `version` field yields
/// [`DEFAULT_VERSION`]; a read or parse failure logs a warning and yields
/// [`DEFAULT_VERSION`] as well.
#[must_use]
pub fn discover_version(skill_dir: &Path) -> String {
    let manifest_path = skill_dir.join(VERSION_MANIFEST);
    if !manifest_path.exists() {
        return DEFAULT_VERSION.to_owned();
    }
    match read_version(&manifest_path) {
        Ok(version) => {
            info!("detected version: {version}");
            version
        }
        Err(err) => {
            warn!(
                "could not read version from {}: {err}",
                manifest_path.display()
            );
            DEFAULT_VERSION.to_owned()
        }
    }
}

fn read_version(path: &Path) -> Result<String, VersionError> {
    let raw = std::fs::read_to_string(path)?;
    let manifest: Value = serde_json::from_str(&raw)?;
    Ok(manifest
        .get("version")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_VERSION)
        .to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn version_field_is_read() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"version":"2.3.1"}"#).unwrap();
        assert_eq!(discover_version(dir.path()), "2.3.1");
    }

    #[test]
    fn absent_manifest_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(discover_version(dir.path()), DEFAULT_VERSION);
    }

    #[test]
    fn missing_field_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"name":"x"}"#).unwrap();
        assert_eq!(discover_version(dir.path()), DEFAULT_VERSION);
    }

    #[test]
    fn malformed_json_falls_back() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("package.json"), "{not json").unwrap();
        assert_eq!(discover_version(dir.path()), DEFAULT_VERSION);
    }

    #[test]
    fn non_string_version_falls_back() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"version":2}"#).unwrap();
        assert_eq!(discover_version(dir.path()), DEFAULT_VERSION);
    }
}
