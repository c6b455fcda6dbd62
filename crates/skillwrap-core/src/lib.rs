//! Core domain rules for the skillwrap packager.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

pub mod build_manifest;
pub mod exclude;
pub mod version;

/// Manifest file that identifies a directory as a skill folder.
pub const SKILL_MANIFEST: &str = "SKILL.md";

/// Name of the build directory created inside the skill folder.
pub const BUILD_DIR: &str = "build";

/// Extension of the produced archive.
pub const ARCHIVE_EXTENSION: &str = "skill";
