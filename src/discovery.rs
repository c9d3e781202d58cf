//! Discovery and renaming of the template's package folders.

use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::constants::PLACEHOLDER_PREFIX;
use crate::error::{Error, Result};
use crate::package::{PackageRole, RenamedPackage};

/// Returns the role of a placeholder folder name, `None` if the name
/// does not belong to the template.
pub fn match_placeholder_folder(name: &str) -> Option<PackageRole> {
    if !name.starts_with(PLACEHOLDER_PREFIX) {
        return None;
    }
    PackageRole::from_folder_name(name)
}

/// Renames `source` to `target`, refusing to replace an existing entry.
///
/// Renaming an entry onto itself is accepted as a no-op.
pub fn rename_entry(source: &Path, target: &Path) -> Result<()> {
    if source == target {
        debug!("'{}' already has its target name", source.display());
        return Ok(());
    }
    if target.exists() {
        return Err(Error::RenameError {
            source_path: source.to_path_buf(),
            target_path: target.to_path_buf(),
            error: io::Error::new(io::ErrorKind::AlreadyExists, "target already exists"),
        });
    }
    fs::rename(source, target).map_err(|error| Error::RenameError {
        source_path: source.to_path_buf(),
        target_path: target.to_path_buf(),
        error,
    })
}

/// Renames every placeholder package folder directly under `root`.
///
/// # Arguments
/// * `root` - Directory holding the template packages
/// * `project_name` - Replaces the placeholder stem, the suffix is kept
///
/// # Returns
/// * `Result<Vec<RenamedPackage>>` - Renamed folders in directory-listing order
///
/// # Errors
/// * `Error::RenameError` on the first folder that cannot be renamed; the
///   run stops there and earlier renames stay in place
pub fn rename_package_folders<P: AsRef<Path>>(
    root: P,
    project_name: &str,
) -> Result<Vec<RenamedPackage>> {
    let root = fs::canonicalize(root.as_ref()).map_err(Error::IoError)?;
    debug!("Scanning {} for template packages", root.display());

    // Collect first so renames don't race the directory iterator.
    let entries: Vec<PathBuf> = WalkDir::new(&root)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .map(|entry| entry.map(|e| e.into_path()))
        .collect::<std::result::Result<_, _>>()?;

    let mut renamed = Vec::new();
    for full_path in entries {
        let role = full_path
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|_| full_path.is_dir())
            .and_then(match_placeholder_folder);

        let Some(role) = role else {
            println!("Not renamed: {}", full_path.display());
            continue;
        };

        let new_path = root.join(format!("{}{}", project_name, role.suffix()));
        rename_entry(&full_path, &new_path)?;
        println!("Renamed: {} -> {}", full_path.display(), new_path.display());
        renamed.push(RenamedPackage::new(new_path, role));
    }

    Ok(renamed)
}

