//! Launch file patching for bringup packages.

use globset::{Glob, GlobMatcher};
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::constants::{LAUNCH_DIR, LAUNCH_FILE_GLOB};
use crate::error::Result;
use crate::package::{PackageRole, PrefixPair, RenamedPackage};
use crate::patcher::{patch_and_report, PatchOutcome};

fn launch_matcher() -> Result<GlobMatcher> {
    Ok(Glob::new(LAUNCH_FILE_GLOB)?.compile_matcher())
}

/// Lists the launch files directly inside `launch_dir`.
///
/// Only the file name is matched, so `*.launch.py` never reaches into
/// subdirectories.
pub fn find_launch_files<P: AsRef<Path>>(launch_dir: P) -> Result<Vec<PathBuf>> {
    let matcher = launch_matcher()?;
    let mut files = Vec::new();
    for entry in WalkDir::new(launch_dir.as_ref()).min_depth(1).max_depth(1) {
        let entry = entry?;
        if entry.path().is_file() && matcher.is_match(entry.file_name()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Rewrites the launch files of every bringup package with the prefix pair.
/// Launch files keep their names.
pub fn patch_launch_files(
    packages: &[RenamedPackage],
    prefix: &PrefixPair,
) -> Result<Vec<PatchOutcome>> {
    let mut outcomes = Vec::new();
    for package in packages.iter().filter(|p| p.role == PackageRole::Bringup) {
        let launch_dir = package.path().join(LAUNCH_DIR);
        if !launch_dir.is_dir() {
            println!("File not found: {}", launch_dir.display());
            outcomes.push(PatchOutcome::NotFound);
            continue;
        }

        let files = find_launch_files(&launch_dir)?;
        debug!("Found {} launch file(s) in {}", files.len(), launch_dir.display());
        for file in files {
            outcomes.push(patch_and_report(&file, &prefix.as_replacement())?);
        }
    }
    Ok(outcomes)
}
