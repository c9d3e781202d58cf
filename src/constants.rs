//! Common constants used throughout the renamer.
//!
//! Every literal the renamer matches on lives here, so the substitution
//! rules can be read in one place.

/// Marks names owned by the template
pub const PLACEHOLDER_PREFIX: &str = "ros_gz_example_";

/// Project information file, looked up next to the executable
pub const CONFIG_FILE: &str = "project_information.yaml";

/// Build file of every package
pub const BUILD_FILE: &str = "CMakeLists.txt";

/// Package manifest of every package
pub const MANIFEST_FILE: &str = "package.xml";

pub const CONFIG_DIR: &str = "config";
pub const HOOKS_DIR: &str = "hooks";
pub const LAUNCH_DIR: &str = "launch";

/// Bridge configuration shipped with the bringup package
pub const BRIDGE_CONFIG_FILE: &str = "ros_gz_example_bridge.yaml";

/// Environment hook templates of the description package
pub const DESCRIPTION_HOOK_FILES: [&str; 2] = [
    "ros_gz_example_description.dsv.in",
    "ros_gz_example_description.sh.in",
];

/// Environment hook templates of the gazebo package
pub const GAZEBO_HOOK_FILES: [&str; 2] = [
    "ros_gz_example_gazebo.dsv.in",
    "ros_gz_example_gazebo.sh.in",
];

/// Launch files inside `launch/`
pub const LAUNCH_FILE_GLOB: &str = "*.launch.py";

/// Version every template manifest starts with
pub const TEMPLATE_VERSION: &str = "0.0.0";

/// Maintainer tag as shipped by the template
pub const TEMPLATE_MAINTAINER: &str =
    r#"<maintainer email="michael@openrobotics.org">Michael Carroll</maintainer>"#;

/// Author tag as shipped by the template
pub const TEMPLATE_AUTHOR: &str = "<author>Michael Carroll</author>";

/// Co-author line dropped from the manifest, indentation included
pub const TEMPLATE_CO_AUTHOR: &str = "  <author>Dharini Dutia</author>";

/// Sibling packages other manifests depend on
pub const DEPENDENCY_SUFFIXES: [&str; 2] = ["description", "gazebo"];
