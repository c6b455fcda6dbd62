//! Creates the `.skill` zip archive and the build directory mirror from one
//! filtered traversal of the skill folder.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use skillwrap_core::exclude::is_excluded;
use skillwrap_core::version::discover_version;
use skillwrap_core::{ARCHIVE_EXTENSION, SKILL_MANIFEST};
use skillwrap_validate::validator::SkillValidator;

use crate::build_dir::{copy_preserving_mtime, prepare_build_dir, write_build_manifest};
use crate::error::PackError;

/// Package the skill folder at `skill_dir` into
/// `<output>/<skill-name>-<version>.skill` and regenerate
/// `<skill_dir>/build/` with the same filtered file set.
///
/// `output_dir` defaults to the current working directory; it is created
/// (with parents) when given and missing. Returns the absolute archive path.
///
/// Both the archive and the mirror are fed from a single traversal, so the
/// two file sets cannot diverge. The build directory additionally receives a
/// generated `package.json` after the archive is closed.
///
/// # Errors
///
/// Returns a precondition [`PackError`] variant before any mutation when the
/// folder is missing, not a directory, has no `SKILL.md`, or fails
/// validation; any failure while writing funnels into
/// [`PackError::Io`], [`PackError::Archive`], or [`PackError::Json`].
pub fn package_skill(
    skill_dir: &Path,
    output_dir: Option<&Path>,
    validator: &dyn SkillValidator,
) -> Result<PathBuf, PackError> {
    if !skill_dir.exists() {
        return Err(PackError::FolderNotFound(skill_dir.to_path_buf()));
    }
    let skill_dir = skill_dir.canonicalize()?;
    if !skill_dir.is_dir() {
        return Err(PackError::NotADirectory(skill_dir));
    }
    if !skill_dir.join(SKILL_MANIFEST).is_file() {
        return Err(PackError::SkillManifestMissing(skill_dir));
    }

    info!("validating skill: {}", skill_dir.display());
    let verdict = validator.validate(&skill_dir);
    if !verdict.valid {
        return Err(PackError::Validation(verdict.message));
    }
    info!("{}", verdict.message);

    let skill_name = skill_dir
        .file_name()
        .and_then(|n| n.to_str())
        .map(ToOwned::to_owned)
        .ok_or_else(|| PackError::NonUtf8Name(skill_dir.clone()))?;

    let version = discover_version(&skill_dir);

    let output_dir = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            dir.canonicalize()?
        }
        None => std::env::current_dir()?,
    };

    let build_dir = prepare_build_dir(&skill_dir)?;

    let archive_path = output_dir.join(format!("{skill_name}-{version}.{ARCHIVE_EXTENSION}"));
    let mut archive = ZipWriter::new(File::create(&archive_path)?);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut walker = walkdir::WalkDir::new(&skill_dir)
        .follow_links(false)
        .into_iter();
    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|e| io::Error::other(e.to_string()))?;
        let Ok(rel) = entry.path().strip_prefix(&skill_dir) else {
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

        debug!("adding: {}", rel.display());
        archive.start_file(zip_entry_name(&skill_name, rel), options)?;
        let mut src = File::open(entry.path())?;
        io::copy(&mut src, &mut archive)?;

        copy_preserving_mtime(entry.path(), &build_dir.join(rel))?;
    }

    archive.finish()?;

    // After the archive is closed, so the generated manifest exists only in
    // the build directory.
    write_build_manifest(&build_dir, &version)?;

    info!("packaged skill to {}", archive_path.display());
    Ok(archive_path)
}

/// Archive entry name: the skill folder name as top-level prefix, then the
/// relative path with `/` separators regardless of platform.
fn zip_entry_name(skill_name: &str, rel: &Path) -> String {
    let mut name = String::from(skill_name);
    for component in rel.components() {
        name.push('/');
        name.push_str(&component.as_os_str().to_string_lossy());
    }
    name
}
