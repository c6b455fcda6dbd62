//! Exclusion rules deciding which entries of a skill folder are packaged.
//!
//! The predicate is pure over a path *relative to the skill folder*, so it
//! can be tested without touching the filesystem. Component rules exclude a
//! whole subtree; name and extension rules apply to the final component only.

use std::path::{Component, Path};

use crate::{ARCHIVE_EXTENSION, BUILD_DIR};

/// Directory (or file) names that exclude an entire subtree when they appear
/// as any component of a relative path.
pub const EXCLUDED_COMPONENTS: &[&str] = &[
    "rules",
    ".git",
    "__pycache__",
    ".trae",
    "skill-creator",
    "upstream-src",
    BUILD_DIR,
];

/// File names never packaged. The three `*.py` entries are the original
/// packaging-tool scripts, still present at the root of older skill folders.
pub const EXCLUDED_FILES: &[&str] = &[
    "feedback_logs.jsonl",
    ".gitignore",
    ".gitmodules",
    "package_skill.py",
    "init_skill.py",
    "quick_validate.py",
];

/// Returns true when `rel_path` must not be packaged.
///
/// `rel_path` is relative to the skill folder root. Matching is on exact
/// names; non-UTF-8 components never match a rule.
#[must_use]
pub fn is_excluded(rel_path: &Path) -> bool {
    for component in rel_path.components() {
        if let Component::Normal(name) = component {
            if let Some(name) = name.to_str() {
                if EXCLUDED_COMPONENTS.contains(&name) {
                    return true;
                }
            }
        }
    }

    if let Some(name) = rel_path.file_name().and_then(|n| n.to_str()) {
        if EXCLUDED_FILES.contains(&name) {
            return true;
        }
    }

    rel_path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == ARCHIVE_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn plain_files_are_included() {
        assert!(!is_excluded(Path::new("SKILL.md")));
        assert!(!is_excluded(&PathBuf::from("docs").join("patterns.md")));
    }

    #[test]
    fn excluded_component_prunes_subtree() {
        assert!(is_excluded(&PathBuf::from(".git").join("HEAD")));
        assert!(is_excluded(
            &PathBuf::from("docs").join("__pycache__").join("x.pyc")
        ));
        assert!(is_excluded(&PathBuf::from("upstream-src").join("lib.js")));
    }

    #[test]
    fn build_dir_is_excluded_even_as_file_name() {
        assert!(is_excluded(Path::new("build")));
        assert!(is_excluded(&PathBuf::from("build").join("package.json")));
    }

    #[test]
    fn file_name_rules_hit_only_the_final_component() {
        assert!(is_excluded(Path::new(".gitignore")));
        assert!(is_excluded(&PathBuf::from("docs").join("feedback_logs.jsonl")));
        // A directory named after an excluded file does not exclude children.
        assert!(!is_excluded(&PathBuf::from(".gitignore.d").join("notes.md")));
    }

    #[test]
    fn packaging_scripts_are_excluded() {
        assert!(is_excluded(Path::new("package_skill.py")));
        assert!(is_excluded(Path::new("init_skill.py")));
        assert!(is_excluded(Path::new("quick_validate.py")));
        assert!(!is_excluded(Path::new("helper.py")));
    }

    #[test]
    fn existing_archives_are_excluded() {
        assert!(is_excluded(Path::new("my-skill-1.0.0.skill")));
        assert!(!is_excluded(Path::new("skill.md")));
    }
}
