//! Test fixtures and utilities for reducing test setup duplication.
//!
//! Builds throwaway installation roots and project trees in the system temp
//! location.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_install_root, create_nested_dir, install_version};
//!
//! #[test]
//! fn my_test() {
//!     let (temp, layout) = create_install_root();
//!     install_version(&layout, Arch::Base, "1.8.1");
//!     let project = create_nested_dir(&temp, "work/project");
//! }
//! ```
//!
//! The installation root lives in `<temp>/iodist`, a sibling of any project
//! directories created with [`create_nested_dir`], so the global marker is
//! never picked up by the upward walk for a local one.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::arch::Arch;
use crate::layout::InstallLayout;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::temp::temp_dir_base()).expect("Failed to create temp directory")
}

/// Create a temp directory holding an empty installation root.
///
/// # Panics
///
/// Panics if the directories cannot be created.
#[must_use]
pub fn create_install_root() -> (TempDir, InstallLayout) {
    let temp = create_temp_dir();
    let root = temp.path().join("iodist");
    std::fs::create_dir_all(&root).expect("Failed to create installation root");
    (temp, InstallLayout::new(root))
}

/// Create an (empty) version directory and return its path.
///
/// # Panics
///
/// Panics if the directory cannot be created.
pub fn install_version(layout: &InstallLayout, arch: Arch, version: &str) -> PathBuf {
    let dir = layout.version_dir(arch, version);
    std::fs::create_dir_all(&dir).expect("Failed to create version directory");
    dir
}

/// Create a nested directory structure inside the temp directory.
///
/// # Panics
///
/// Panics if the directory cannot be created.
#[must_use]
pub fn create_nested_dir(temp: &TempDir, path: &str) -> PathBuf {
    let nested = temp.path().join(path);
    std::fs::create_dir_all(&nested).expect("Failed to create nested directory");
    nested
}

/// Write `content` to `path`, creating parent directories.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write test file");
}

/// Create test files in a directory.
///
/// Takes a list of (path, content) tuples relative to the temp directory.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn create_test_files(temp: &TempDir, files: &[(&str, &str)]) {
    for (path, content) in files {
        write_file(&temp.path().join(path), content);
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
    }

    #[test]
    fn test_create_install_root() {
        let (temp, layout) = create_install_root();
        assert!(layout.root().is_dir());
        assert!(layout.root().starts_with(temp.path()));
    }

    #[test]
    fn test_install_version() {
        let (_temp, layout) = create_install_root();
        let dir = install_version(&layout, Arch::X64, "2.0.0");
        assert!(dir.is_dir());
        assert!(dir.ends_with(Path::new("v-x64").join("2.0.0")));
    }

    #[test]
    fn test_create_test_files() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("a/b/.node-version", "1.0.0")]);
        assert_eq!(
            std::fs::read_to_string(temp.path().join("a/b/.node-version"))
                .expect("Failed to read file"),
            "1.0.0"
        );
    }
}
