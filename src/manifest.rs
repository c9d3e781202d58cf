//! Build file and package manifest patching.

use log::debug;

use crate::config::ProjectInfo;
use crate::constants::{
    BUILD_FILE, DEPENDENCY_SUFFIXES, MANIFEST_FILE, PLACEHOLDER_PREFIX, TEMPLATE_AUTHOR,
    TEMPLATE_CO_AUTHOR, TEMPLATE_MAINTAINER, TEMPLATE_VERSION,
};
use crate::error::Result;
use crate::package::{PackageRole, PrefixPair, RenamedPackage};
use crate::patcher::{patch_and_report, patch_file, PatchOutcome};

/// Rewrites the build file of every package with the prefix pair.
pub fn patch_build_files(
    packages: &[RenamedPackage],
    prefix: &PrefixPair,
) -> Result<Vec<PatchOutcome>> {
    let replacement = prefix.as_replacement();
    packages
        .iter()
        .map(|package| patch_and_report(package.path().join(BUILD_FILE), &replacement))
        .collect()
}

/// Ordered `(old, new)` table applied to every manifest.
///
/// Reads `project_name`, `version`, `description`, `author` and `email`,
/// so a missing key fails here.
pub fn manifest_replacements(info: &ProjectInfo) -> Result<Vec<(String, String)>> {
    let project_name = info.project_name()?;
    let version = info.version()?;
    let description = info.description()?;
    let email = info.email()?;
    let author = info.author()?;

    let mut table = vec![
        (format!("<name>{}", PLACEHOLDER_PREFIX), format!("<name>{}_", project_name)),
        (
            format!("<version>{}</version>", TEMPLATE_VERSION),
            format!("<version>{}</version>", version),
        ),
    ];

    for role in PackageRole::ALL {
        let template = role.description_template();
        table.push((template.original(), template.render(&description)));
    }

    table.push((
        TEMPLATE_MAINTAINER.to_string(),
        format!(r#"<maintainer email="{}">{}</maintainer>"#, email, author),
    ));
    table.push((TEMPLATE_AUTHOR.to_string(), format!("<author>{}</author>", author)));
    table.push((TEMPLATE_CO_AUTHOR.to_string(), String::new()));

    for dependency in DEPENDENCY_SUFFIXES {
        table.push((
            format!("<depend>{}{}</depend>", PLACEHOLDER_PREFIX, dependency),
            format!("<depend>{}_{}</depend>", project_name, dependency),
        ));
    }

    Ok(table)
}

/// Rewrites the manifest of every package with the project information.
///
/// The replacement table is built when the first manifest is found and
/// applied regardless of the package role.
pub fn patch_manifests(
    packages: &[RenamedPackage],
    info: &ProjectInfo,
) -> Result<Vec<PatchOutcome>> {
    let mut table: Option<Vec<(String, String)>> = None;
    let mut outcomes = Vec::with_capacity(packages.len());

    for package in packages {
        let manifest = package.path().join(MANIFEST_FILE);
        if !manifest.is_file() {
            println!("No package.xml found in: {}", package.path().display());
            outcomes.push(PatchOutcome::NotFound);
            continue;
        }

        if table.is_none() {
            table = Some(manifest_replacements(info)?);
        }
        let replacements: Vec<(&str, &str)> =
            table.iter().flatten().map(|(old, new)| (old.as_str(), new.as_str())).collect();

        let outcome = patch_file(&manifest, &replacements)?;
        println!("Modified package.xml in: {}", manifest.display());
        debug!("Manifest of {} package: {:?}", package.role, outcome);
        outcomes.push(outcome);
    }
    Ok(outcomes)
}
