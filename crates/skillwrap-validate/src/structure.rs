//! Structural validity checks on a skill folder.

use std::path::Path;

use log::debug;

use skillwrap_core::exclude::is_excluded;
use skillwrap_core::SKILL_MANIFEST;

use crate::validator::{SkillValidator, Verdict};

const MAX_TOTAL_BYTES: u64 = 50 * 1024 * 1024; // 50 MiB

/// Default validator: checks that `SKILL.md` has content and that the
/// packaged file set stays under a size cap.
///
/// Only files the exclusion rules would keep are counted, so a bloated
/// `.git` directory does not fail an otherwise small skill.
#[derive(Debug, Clone)]
pub struct StructureValidator {
    max_total_bytes: u64,
}

impl Default for StructureValidator {
    fn default() -> Self {
        Self {
            max_total_bytes: MAX_TOTAL_BYTES,
        }
    }
}

impl StructureValidator {
    /// Override the size cap. Used by tests; production callers keep the
    /// default.
    #[must_use]
    pub fn with_max_total_bytes(max_total_bytes: u64) -> Self {
        Self { max_total_bytes }
    }
}

impl SkillValidator for StructureValidator {
    fn validate(&self, skill_dir: &Path) -> Verdict {
        let manifest_path = skill_dir.join(SKILL_MANIFEST);
        let manifest = match std::fs::read_to_string(&manifest_path) {
            Ok(raw) => raw,
            Err(err) => {
                return Verdict::fail(format!("{SKILL_MANIFEST} could not be read: {err}"))
            }
        };
        if manifest.trim().is_empty() {
            return Verdict::fail(format!("{SKILL_MANIFEST} is empty"));
        }

        let mut total_bytes: u64 = 0;
        let mut file_count: u64 = 0;

        let mut walker = walkdir::WalkDir::new(skill_dir).into_iter();
        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => return Verdict::fail(format!("could not walk skill folder: {err}")),
            };
            let Ok(rel) = entry.path().strip_prefix(skill_dir) else {
                continue;
            };
            if rel.as_os_str().is_empty() {
                continue;
            }
            if is_excluded(rel) {
                if entry.file_type().is_dir() {
                    walker.skip_current_dir();
                }
                continue;
            }
            if !entry.file_type().is_file() {
                continue;
            }

            let len = match entry.metadata() {
                Ok(meta) => meta.len(),
                Err(err) => {
                    return Verdict::fail(format!(
                        "could not stat {}: {err}",
                        entry.path().display()
                    ))
                }
            };
            debug!("counted: {} ({len} bytes)", rel.display());
            total_bytes += len;
            file_count += 1;

            if total_bytes > self.max_total_bytes {
                let max = self.max_total_bytes;
                return Verdict::fail(format!(
                    "skill content is over {total_bytes} bytes (maximum {max})"
                ));
            }
        }

        Verdict::pass(format!(
            "skill structure OK ({file_count} files, {total_bytes} bytes)"
        ))
    }
}
