//! Core rename orchestration.
//! Runs every stage once, in order, against the folders found by discovery.

use log::debug;
use std::fmt;
use std::path::Path;

use crate::auxiliary::patch_auxiliary_files;
use crate::config::ProjectInfo;
use crate::discovery::rename_package_folders;
use crate::error::Result;
use crate::launch::patch_launch_files;
use crate::manifest::{patch_build_files, patch_manifests};
use crate::package::{PrefixPair, RenamedPackage};
use crate::patcher::PatchOutcome;

/// Counts of what a run did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub packages: Vec<RenamedPackage>,
    pub modified: usize,
    pub not_found: usize,
}

impl RunSummary {
    fn record(&mut self, outcomes: &[PatchOutcome]) {
        for outcome in outcomes {
            match outcome {
                PatchOutcome::Modified => self.modified += 1,
                PatchOutcome::NotFound => self.not_found += 1,
            }
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} package(s) renamed, {} file(s) modified, {} file(s) not found",
            self.packages.len(),
            self.modified,
            self.not_found
        )
    }
}

/// Renames the template packages under `root` after the project.
///
/// # Flow
/// 1. Derives the prefix pair from `project_name`
/// 2. Renames placeholder folders
/// 3. Patches build files
/// 4. Patches manifests
/// 5. Renames and patches auxiliary files
/// 6. Patches bringup launch files
///
/// # Errors
/// Any error stops the run where it happens. Work already done is kept.
pub fn process<P: AsRef<Path>>(root: P, info: &ProjectInfo) -> Result<RunSummary> {
    let project_name = info.project_name()?;
    let prefix = PrefixPair::from_project_name(&project_name);
    debug!("Replacing prefix '{}' with '{}'", prefix.old, prefix.new);

    let packages = rename_package_folders(root, &project_name)?;
    let mut summary = RunSummary::default();

    summary.record(&patch_build_files(&packages, &prefix)?);
    summary.record(&patch_manifests(&packages, info)?);
    summary.record(&patch_auxiliary_files(&packages, &prefix)?);
    summary.record(&patch_launch_files(&packages, &prefix)?);

    summary.packages = packages;
    Ok(summary)
}
