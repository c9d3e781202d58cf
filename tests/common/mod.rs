#![allow(dead_code)]

use ros_gz_renamer::config::{parse_config, ProjectInfo};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

pub const PROJECT_INFO: &str = r#"
project_name: my_robot
version: 1.2.0
description: my robot demo
author: A. Dev
email: a@dev.com
"#;

pub fn project_info() -> ProjectInfo {
    parse_config(PROJECT_INFO).unwrap()
}

pub fn write<P: AsRef<Path>>(path: P, content: &str) {
    let path = path.as_ref();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

pub fn read<P: AsRef<Path>>(path: P) -> String {
    fs::read_to_string(path).unwrap()
}

pub fn manifest(suffix: &str, description: &str) -> String {
    format!(
        r#"<?xml version="1.0"?>
<package format="3">
  <name>ros_gz_example_{suffix}</name>
  <version>0.0.0</version>
  <description>{description}</description>
  <maintainer email="michael@openrobotics.org">Michael Carroll</maintainer>
  <license>Apache 2.0</license>
  <author>Michael Carroll</author>
  <author>Dharini Dutia</author>

  <buildtool_depend>ament_cmake</buildtool_depend>
  <depend>ros_gz_example_description</depend>
  <depend>ros_gz_example_gazebo</depend>
</package>
"#
    )
}

pub const CMAKE: &str = "cmake_minimum_required(VERSION 3.5)\nproject(ros_gz_example_gazebo)\n\
ament_environment_hooks(\"${CMAKE_CURRENT_SOURCE_DIR}/hooks/${PROJECT_NAME}.dsv.in\")\n";

pub const LAUNCH: &str = "pkg_project_bringup = get_package_share_directory('ros_gz_example_bringup')\n\
pkg_project_gazebo = get_package_share_directory('ros_gz_example_gazebo')\n";

/// Lays out the four template packages the way the skeleton ships them.
pub fn create_template(root: &Path) {
    let application = root.join("ros_gz_example_application");
    write(application.join("CMakeLists.txt"), "project(ros_gz_example_application)\n");
    write(
        application.join("package.xml"),
        &manifest(
            "application",
            "Application-specific implementations for the ros_gz_project example",
        ),
    );

    let bringup = root.join("ros_gz_example_bringup");
    write(bringup.join("CMakeLists.txt"), "project(ros_gz_example_bringup)\n");
    write(
        bringup.join("package.xml"),
        &manifest("bringup", "Contains launch files for the ros_gz_example project"),
    );
    write(
        bringup.join("config/ros_gz_example_bridge.yaml"),
        "- ros_topic_name: \"diff_drive/cmd_vel\"\n  gz_topic_name: \"/model/ros_gz_example_robot/cmd_vel\"\n",
    );
    write(bringup.join("launch/diff_drive.launch.py"), LAUNCH);
    write(bringup.join("launch/README.md"), "ros_gz_example_bringup launch files\n");

    let description = root.join("ros_gz_example_description");
    write(description.join("CMakeLists.txt"), "project(ros_gz_example_description)\n");
    write(
        description.join("package.xml"),
        &manifest("description", "SDFormat description files for the ros_gz_example project"),
    );
    write(
        description.join("hooks/ros_gz_example_description.dsv.in"),
        "prepend-non-duplicate;GZ_SIM_RESOURCE_PATH;share/ros_gz_example_description/models\n",
    );
    write(
        description.join("hooks/ros_gz_example_description.sh.in"),
        "ament_prepend_unique_value GZ_SIM_RESOURCE_PATH \"$AMENT_CURRENT_PREFIX/share/ros_gz_example_description/models\"\n",
    );

    let gazebo = root.join("ros_gz_example_gazebo");
    write(gazebo.join("CMakeLists.txt"), CMAKE);
    write(
        gazebo.join("package.xml"),
        &manifest("gazebo", "Gazebo-specific implementations for the ros_gz_example project"),
    );
    write(
        gazebo.join("hooks/ros_gz_example_gazebo.dsv.in"),
        "prepend-non-duplicate;GZ_SIM_SYSTEM_PLUGIN_PATH;lib/ros_gz_example_gazebo\n",
    );
    write(
        gazebo.join("hooks/ros_gz_example_gazebo.sh.in"),
        "ament_prepend_unique_value GZ_SIM_SYSTEM_PLUGIN_PATH \"$AMENT_CURRENT_PREFIX/lib/ros_gz_example_gazebo\"\n",
    );
}

/// Copies a directory tree, used to snapshot folders before a run.
pub fn copy_tree(from: &Path, to: &Path) {
    for entry in WalkDir::new(from) {
        let entry = entry.unwrap();
        let target = to.join(entry.path().strip_prefix(from).unwrap());
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

/// The renamer binary built for this test run.
pub fn renamer_cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("ros-gz-renamer").unwrap()
}

/// Writes the project information file and returns its path.
pub fn write_project_info(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("project_information.yaml");
    write(&path, PROJECT_INFO);
    path
}
