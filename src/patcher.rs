//! Literal content patching.
//!
//! Every rewrite the renamer performs goes through [`patch_file`]. The
//! replacement is purely textual: a token inside a comment or an unrelated
//! string is replaced just the same.

use log::debug;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// What happened to a file handed to the patcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Modified,
    NotFound,
}

/// Applies `replacements` in order, each one replacing every
/// non-overlapping occurrence, scanning left to right.
pub fn replace_literal(content: &str, replacements: &[(&str, &str)]) -> String {
    replacements
        .iter()
        .filter(|&&(old, _)| !old.is_empty())
        .fold(content.to_string(), |acc, &(old, new)| acc.replace(old, new))
}

/// Rewrites `path` in place with `replacements`.
///
/// # Returns
/// * `PatchOutcome::NotFound` if `path` is not a regular file; nothing is created
/// * `PatchOutcome::Modified` once the file has been rewritten
///
/// # Errors
/// * `Error::IoError` if the file exists but cannot be read or written
pub fn patch_file<P: AsRef<Path>>(path: P, replacements: &[(&str, &str)]) -> Result<PatchOutcome> {
    let path = path.as_ref();
    if !path.is_file() {
        debug!("Skipping missing file {}", path.display());
        return Ok(PatchOutcome::NotFound);
    }

    let content = fs::read_to_string(path).map_err(Error::IoError)?;
    let patched = replace_literal(&content, replacements);
    fs::write(path, patched).map_err(Error::IoError)?;
    Ok(PatchOutcome::Modified)
}

/// Patches a file and prints the status line for it.
pub fn patch_and_report<P: AsRef<Path>>(
    path: P,
    replacements: &[(&str, &str)],
) -> Result<PatchOutcome> {
    let path = path.as_ref();
    let outcome = patch_file(path, replacements)?;
    match outcome {
        PatchOutcome::Modified => println!("Modified: {}", path.display()),
        PatchOutcome::NotFound => println!("File not found: {}", path.display()),
    }
    Ok(outcome)
}
