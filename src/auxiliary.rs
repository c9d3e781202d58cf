//! Auxiliary files that carry the placeholder prefix in their own name:
//! the bringup bridge config and the environment hooks of the description
//! and gazebo packages.

use log::debug;
use std::path::{Path, PathBuf};

use crate::constants::{
    BRIDGE_CONFIG_FILE, CONFIG_DIR, DESCRIPTION_HOOK_FILES, GAZEBO_HOOK_FILES, HOOKS_DIR,
};
use crate::discovery::rename_entry;
use crate::error::Result;
use crate::package::{PackageRole, PrefixPair, RenamedPackage};
use crate::patcher::{patch_and_report, PatchOutcome};

/// Known auxiliary files of a package, relative to its folder.
pub fn auxiliary_files(role: PackageRole) -> Vec<PathBuf> {
    match role {
        PackageRole::Bringup => vec![Path::new(CONFIG_DIR).join(BRIDGE_CONFIG_FILE)],
        PackageRole::Description => {
            DESCRIPTION_HOOK_FILES.iter().map(|f| Path::new(HOOKS_DIR).join(f)).collect()
        }
        PackageRole::Gazebo => {
            GAZEBO_HOOK_FILES.iter().map(|f| Path::new(HOOKS_DIR).join(f)).collect()
        }
        PackageRole::Application => Vec::new(),
    }
}

/// Renames one auxiliary file with the prefix pair, then patches its content.
///
/// # Returns
/// * `PatchOutcome::NotFound` if the file is absent; nothing is renamed
/// * `PatchOutcome::Modified` with the file at its new name
pub fn rename_and_patch(file: &Path, prefix: &PrefixPair) -> Result<PatchOutcome> {
    if !file.is_file() {
        println!("File not found: {}", file.display());
        return Ok(PatchOutcome::NotFound);
    }

    let Some(name) = file.file_name().and_then(|name| name.to_str()) else {
        println!("File not found: {}", file.display());
        return Ok(PatchOutcome::NotFound);
    };
    let new_file = file.with_file_name(prefix.rename(name));

    rename_entry(file, &new_file)?;
    println!("Renamed file: {} -> {}", file.display(), new_file.display());
    patch_and_report(&new_file, &prefix.as_replacement())
}

/// Renames and patches the auxiliary files of every package.
pub fn patch_auxiliary_files(
    packages: &[RenamedPackage],
    prefix: &PrefixPair,
) -> Result<Vec<PatchOutcome>> {
    let mut outcomes = Vec::new();
    for package in packages {
        let files = auxiliary_files(package.role);
        debug!("{} auxiliary file(s) known for {}", files.len(), package.path().display());
        for relative in files {
            outcomes.push(rename_and_patch(&package.path().join(relative), prefix)?);
        }
    }
    Ok(outcomes)
}
