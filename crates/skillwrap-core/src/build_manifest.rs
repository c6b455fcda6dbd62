//! The generated `package.json` written into the build directory.

use serde::{Deserialize, Serialize};

/// Fixed package name stamped into every build manifest.
pub const BUILD_PACKAGE_NAME: &str = "skill-bundle";

/// Fixed description stamped into every build manifest.
pub const BUILD_PACKAGE_DESCRIPTION: &str =
    "Skill documentation bundle for local linking workflows";

/// The `package.json` emitted into the build directory so the mirrored tree
/// can be consumed by link-based tooling. Always private.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildManifest {
    /// Package name (fixed).
    pub name: String,
    /// Version discovered from the skill folder.
    pub version: String,
    /// Human-readable description (fixed).
    pub description: String,
    /// Always `true` so the bundle can never be published by accident.
    pub private: bool,
}

impl BuildManifest {
    /// Build a manifest for the given skill version.
    #[must_use]
    pub fn for_version(version: &str) -> Self {
        Self {
            name: BUILD_PACKAGE_NAME.to_owned(),
            version: version.to_owned(),
            description: BUILD_PACKAGE_DESCRIPTION.to_owned(),
            private: true,
        }
    }
}
