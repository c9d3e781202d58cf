//! Sub-packages of the template and the values derived from them.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::constants::PLACEHOLDER_PREFIX;

/// Role of a sub-package, identified by its folder suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageRole {
    Application,
    Bringup,
    Description,
    Gazebo,
}

impl PackageRole {
    /// All roles in the order the template lists them.
    pub const ALL: [PackageRole; 4] = [
        PackageRole::Application,
        PackageRole::Bringup,
        PackageRole::Description,
        PackageRole::Gazebo,
    ];

    pub fn suffix(&self) -> &'static str {
        match self {
            PackageRole::Application => "_application",
            PackageRole::Bringup => "_bringup",
            PackageRole::Description => "_description",
            PackageRole::Gazebo => "_gazebo",
        }
    }

    /// Matches a folder name against the known suffixes, first match wins.
    pub fn from_folder_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| name.ends_with(role.suffix()))
    }

    /// The `<description>` element the template ships for this role.
    pub fn description_template(&self) -> DescriptionTemplate {
        match self {
            PackageRole::Application => DescriptionTemplate {
                lead: "Application-specific implementations for the ",
                subject: "ros_gz_project",
                trail: " example",
            },
            PackageRole::Bringup => DescriptionTemplate {
                lead: "Contains launch files for the ",
                subject: "ros_gz_example",
                trail: " project",
            },
            PackageRole::Description => DescriptionTemplate {
                lead: "SDFormat description files for the ",
                subject: "ros_gz_example",
                trail: " project",
            },
            PackageRole::Gazebo => DescriptionTemplate {
                lead: "Gazebo-specific implementations for the ",
                subject: "ros_gz_example",
                trail: " project",
            },
        }
    }
}

impl fmt::Display for PackageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix().trim_start_matches('_'))
    }
}

/// Verbatim `<description>` text with a replaceable subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptionTemplate {
    pub lead: &'static str,
    pub subject: &'static str,
    pub trail: &'static str,
}

impl DescriptionTemplate {
    /// The element exactly as the template ships it.
    pub fn original(&self) -> String {
        self.render(self.subject)
    }

    /// The element with `subject` swapped in.
    pub fn render(&self, subject: &str) -> String {
        format!("<description>{}{}{}</description>", self.lead, subject, self.trail)
    }
}

/// A folder that was renamed from the placeholder prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedPackage {
    pub path: PathBuf,
    pub role: PackageRole,
}

impl RenamedPackage {
    pub fn new<P: Into<PathBuf>>(path: P, role: PackageRole) -> Self {
        Self { path: path.into(), role }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The `(old, new)` prefix used for every literal substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixPair {
    pub old: String,
    pub new: String,
}

impl PrefixPair {
    pub fn from_project_name(project_name: &str) -> Self {
        Self { old: PLACEHOLDER_PREFIX.to_string(), new: format!("{}_", project_name) }
    }

    /// The pair as a replacement table for the content patcher.
    pub fn as_replacement(&self) -> [(&str, &str); 1] {
        [(self.old.as_str(), self.new.as_str())]
    }

    /// Applies the pair to a file or folder name.
    pub fn rename(&self, name: &str) -> String {
        name.replace(&self.old, &self.new)
    }
}
