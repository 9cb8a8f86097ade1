//! Common test utilities for iodist integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Every variable the shim reads, so the host environment never leaks in
pub const IODIST_VARS: &[&str] = &[
    "IODIST_PREFIX",
    "IOJS_VERSION",
    "IODIST_VERSION",
    "PROCESSOR_ARCHITECTURE",
    "IODIST_X64",
    "IODIST_VERBOSE",
];

/// File name of the runtime inside a version directory
#[cfg(windows)]
pub const RUNTIME_BINARY: &str = "iojs.exe";
#[cfg(not(windows))]
pub const RUNTIME_BINARY: &str = "iojs";

/// An installation root plus a project directory outside of it
pub struct TestInstall {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Installation root (`IODIST_PREFIX`)
    pub root: PathBuf,
    /// Working directory commands run in
    pub work: PathBuf,
}

impl TestInstall {
    /// Create an empty installation root and working directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let base = temp
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp directory");
        let root = base.join("iodist");
        let work = base.join("work");
        std::fs::create_dir_all(&root).expect("Failed to create installation root");
        std::fs::create_dir_all(&work).expect("Failed to create working directory");
        Self { temp, root, work }
    }

    /// Version directory for the given tree (`v` or `v-x64`)
    pub fn version_dir(&self, tree: &str, version: &str) -> PathBuf {
        self.root.join(tree).join(version)
    }

    /// Write a file, creating parent directories
    pub fn write_file(&self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Write the global version marker
    pub fn set_global(&self, version: &str) {
        self.write_file(&self.root.join(".node-version"), version);
    }

    /// Create a directory under the working directory and return it
    #[allow(dead_code)]
    pub fn work_dir(&self, rel: &str) -> PathBuf {
        let dir = self.work.join(rel);
        std::fs::create_dir_all(&dir).expect("Failed to create directory");
        dir
    }

    /// Install a shell script as the runtime of a version
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn install_runtime(&self, tree: &str, version: &str, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let exe = self.version_dir(tree, version).join(RUNTIME_BINARY);
        self.write_file(&exe, &format!("#!/bin/sh\n{script}\n"));
        std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make runtime executable");
        exe
    }

    /// Runtime that prints one argument per line
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn install_echo_runtime(&self, tree: &str, version: &str) -> PathBuf {
        self.install_runtime(
            tree,
            version,
            &format!("echo \"runtime {tree}/{version}\"\nfor arg in \"$@\"; do printf '%s\\n' \"$arg\"; done"),
        )
    }

    /// `iojs` shim command with a clean environment pointing at this root
    #[allow(dead_code)]
    pub fn iojs(&self) -> Command {
        let mut cmd = clean_cmd("iojs");
        cmd.env("IODIST_PREFIX", &self.root).current_dir(&self.work);
        cmd
    }

    /// `iodist` inspector command with a clean environment pointing at this root
    #[allow(dead_code)]
    pub fn iodist(&self) -> Command {
        let mut cmd = clean_cmd("iodist");
        cmd.env("IODIST_PREFIX", &self.root).current_dir(&self.work);
        cmd
    }
}

impl Default for TestInstall {
    fn default() -> Self {
        Self::new()
    }
}

/// Binary command with every iodist variable removed
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn clean_cmd(bin: &str) -> Command {
    let mut cmd = Command::cargo_bin(bin).expect("Binary should be built");
    for var in IODIST_VARS {
        cmd.env_remove(var);
    }
    cmd
}
