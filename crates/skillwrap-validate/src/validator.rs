//! The validator seam the packager delegates to.

use std::path::Path;

/// Outcome of validating a skill folder: pass/fail plus a message.
#[derive(Debug, Clone)]
pub struct Verdict {
    /// Whether the skill folder is well-formed.
    pub valid: bool,
    /// Human-readable summary or failure reason.
    pub message: String,
}

impl Verdict {
    /// A passing verdict with a summary message.
    #[must_use]
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
        }
    }

    /// A failing verdict with a reason.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Judges whether a skill folder's contents are well-formed.
///
/// The packager treats implementations as opaque: it only inspects the
/// returned [`Verdict`] and aborts before any mutation on failure.
pub trait SkillValidator {
    /// Validate the skill folder at `skill_dir`.
    fn validate(&self, skill_dir: &Path) -> Verdict;
}
