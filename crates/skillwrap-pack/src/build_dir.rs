//! Build directory management: destroy-and-recreate, file mirroring, and
//! manifest emission.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use skillwrap_core::build_manifest::BuildManifest;
use skillwrap_core::version::VERSION_MANIFEST;
use skillwrap_core::BUILD_DIR;

use crate::error::PackError;

/// Delete any existing `build/` under `skill_dir` and recreate it empty.
///
/// Intentionally destructive with no confirmation: the build directory is
/// owned by the packager and regenerated on every run.
///
/// # Errors
///
/// Returns [`PackError::Io`] if the old directory cannot be removed or the
/// new one created.
pub fn prepare_build_dir(skill_dir: &Path) -> Result<PathBuf, PackError> {
    let build_dir = skill_dir.join(BUILD_DIR);
    if build_dir.exists() {
        fs::remove_dir_all(&build_dir)?;
    }
    fs::create_dir_all(&build_dir)?;
    info!("prepared build directory: {}", build_dir.display());
    Ok(build_dir)
}

/// Copy `src` to `dest`, creating intermediate directories and carrying the
/// source modification time over to the copy.
///
/// # Errors
///
/// Returns any I/O error from the copy or metadata transfer.
pub fn copy_preserving_mtime(src: &Path, dest: &Path) -> std::io::Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(src, dest)?;
    let mtime = fs::metadata(src)?.modified()?;
    let dest_file = fs::OpenOptions::new().write(true).open(dest)?;
    dest_file.set_modified(mtime)?;
    Ok(())
}

/// Write the generated `package.json` into the build directory.
///
/// Emitted after the archive is closed, so the manifest exists only in the
/// mirror and never inside the archive.
///
/// # Errors
///
/// Returns [`PackError::Json`] on serialization failure or
/// [`PackError::Io`] if the file cannot be written.
pub fn write_build_manifest(build_dir: &Path, version: &str) -> Result<(), PackError> {
    let manifest = BuildManifest::for_version(version);
    let json = serde_json::to_string_pretty(&manifest)?;
    fs::write(build_dir.join(VERSION_MANIFEST), json)?;
    debug!("wrote {VERSION_MANIFEST} to {}", build_dir.display());
    Ok(())
}
