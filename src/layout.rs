//! On-disk layout of an iodist installation
//!
//! ```text
//! <root>/.node-version            global version marker
//! <root>/v/<version>/iojs[.exe]   base variant
//! <root>/v/<version>/args         persisted default arguments
//! <root>/v-x64/<version>/...      64-bit variant
//! ```

use std::cmp::Ordering;
use std::io;
use std::path::{Path, PathBuf};

use semver::Version;

use crate::arch::Arch;
use crate::common::fs::FileSystem;
use crate::error::{IodistError, Result};

/// Name of the version marker, both the global one and project-local ones.
pub const VERSION_MARKER: &str = ".node-version";

/// Name of the persisted default-arguments file inside a version directory.
pub const ARGS_FILE: &str = "args";

/// File name of the runtime executable inside a version directory.
#[cfg(windows)]
pub const RUNTIME_BINARY: &str = "iojs.exe";
#[cfg(not(windows))]
pub const RUNTIME_BINARY: &str = "iojs";

/// Paths inside the installation root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    root: PathBuf,
}

impl InstallLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn global_marker(&self) -> PathBuf {
        self.root.join(VERSION_MARKER)
    }

    /// Directory holding every installed version of one variant.
    pub fn versions_dir(&self, arch: Arch) -> PathBuf {
        self.root.join(arch.dir_name())
    }

    pub fn version_dir(&self, arch: Arch, version: &str) -> PathBuf {
        self.versions_dir(arch).join(version)
    }

    pub fn executable(&self, arch: Arch, version: &str) -> PathBuf {
        self.version_dir(arch, version).join(RUNTIME_BINARY)
    }

    pub fn args_file(&self, arch: Arch, version: &str) -> PathBuf {
        self.version_dir(arch, version).join(ARGS_FILE)
    }
}

/// Versions installed for one variant, in ascending order.
///
/// A variant tree that does not exist yet has no versions.
pub fn installed_versions(
    fs: &impl FileSystem,
    layout: &InstallLayout,
    arch: Arch,
) -> Result<Vec<String>> {
    let dir = layout.versions_dir(arch);
    let mut versions = match fs.subdirectories(&dir) {
        Ok(names) => names,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => {
            return Err(IodistError::VersionDirReadFailed {
                path: dir.display().to_string(),
                reason: err.to_string(),
            });
        }
    };
    versions.sort_by(|a, b| compare_versions(a, b));
    Ok(versions)
}

/// Semantic versions sort numerically and before anything that is not one.
fn compare_versions(a: &str, b: &str) -> Ordering {
    match (Version::parse(a), Version::parse(b)) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
