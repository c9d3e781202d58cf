//! Renamer for the ros_gz_project_template skeleton.
//! Turns the `ros_gz_example_*` packages into packages named after a project,
//! patching build files, manifests, hooks, bridge config and launch files.

/// Auxiliary files renamed along with their package:
/// - config/ros_gz_example_bridge.yaml (bringup)
/// - hooks/*.dsv.in and hooks/*.sh.in (description, gazebo)
pub mod auxiliary;

/// Command-line interface module
pub mod cli;

/// Project information file loading
/// Supports JSON and YAML content
pub mod config;

/// Fixed names and template strings
pub mod constants;

/// Placeholder folder discovery and renaming
pub mod discovery;

/// Error types and handling
pub mod error;

/// Launch file patching for bringup packages
pub mod launch;

/// Logger setup
pub mod logger;

/// Build file and package manifest patching
pub mod manifest;

/// Package roles, folder records and the prefix pair
pub mod package;

/// Literal find-and-replace on files
pub mod patcher;

/// Core rename orchestration
pub mod processor;
