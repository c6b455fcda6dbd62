//! Error types for the packaging operation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while packaging a skill folder.
///
/// The first four variants are precondition failures raised before any
/// filesystem mutation; the rest wrap failures from the write phase.
#[derive(Debug, Error)]
pub enum PackError {
    /// The skill folder path does not exist.
    #[error("skill folder not found: {0}")]
    FolderNotFound(PathBuf),
    /// The skill folder path is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
    /// No `SKILL.md` directly inside the skill folder.
    #[error("SKILL.md not found in {0}")]
    SkillManifestMissing(PathBuf),
    /// The skill folder name cannot be used as an archive name.
    #[error("skill folder name is not valid UTF-8: {0}")]
    NonUtf8Name(PathBuf),
    /// The validator rejected the skill folder.
    #[error("validation failed: {0}")]
    Validation(String),
    /// An I/O error occurred while writing the archive or build directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The zip archive could not be written.
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
    /// The build manifest could not be serialized.
    #[error("manifest error: {0}")]
    Json(#[from] serde_json::Error),
}
