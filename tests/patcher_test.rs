mod common;

use ros_gz_renamer::patcher::{patch_file, PatchOutcome};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_patch_replaces_every_occurrence() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("CMakeLists.txt");
    common::write(&path, common::CMAKE);

    let outcome = patch_file(&path, &[("ros_gz_example_", "my_robot_")]).unwrap();

    assert_eq!(outcome, PatchOutcome::Modified);
    let content = common::read(&path);
    assert!(!content.contains("ros_gz_example_"));
    assert_eq!(content, common::CMAKE.replace("ros_gz_example_", "my_robot_"));
}

#[test]
fn test_patch_is_blind_to_context() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notes.txt");
    common::write(&path, "# see ros_gz_example_docs\nurl = \"ros_gz_example_\"\n");

    patch_file(&path, &[("ros_gz_example_", "bot_")]).unwrap();

    assert_eq!(common::read(&path), "# see bot_docs\nurl = \"bot_\"\n");
}

#[test]
fn test_patch_missing_file_is_not_created() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.txt");

    let outcome = patch_file(&path, &[("a", "b")]).unwrap();

    assert_eq!(outcome, PatchOutcome::NotFound);
    assert!(!path.exists());
}

#[test]
fn test_patch_directory_counts_as_missing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("CMakeLists.txt");
    fs::create_dir(&path).unwrap();

    assert_eq!(patch_file(&path, &[("a", "b")]).unwrap(), PatchOutcome::NotFound);
}
