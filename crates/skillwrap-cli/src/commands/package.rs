//! `skillwrap <skill-folder> [output-dir]` — package a skill folder.

use std::path::{Path, PathBuf};

use anyhow::Result;

use skillwrap_core::BUILD_DIR;
use skillwrap_pack::pack::package_skill;
use skillwrap_validate::structure::StructureValidator;

/// Package the skill folder and report the produced paths.
///
/// Returns the archive path so the caller can map success to exit code 0.
///
/// # Errors
///
/// Returns an error for any precondition, validation, or write failure.
pub fn run_package(skill_dir: &Path, output_dir: Option<&Path>) -> Result<PathBuf> {
    println!("packaging skill: {}", skill_dir.display());

    let archive_path = package_skill(skill_dir, output_dir, &StructureValidator::default())?;

    println!("packaged: {}", archive_path.display());
    println!(
        "build directory ready: {}",
        skill_dir.join(BUILD_DIR).display()
    );
    Ok(archive_path)
}
