//! Read-only file system access

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Read-only view of the file system
///
/// Nothing in iodist writes to disk, so the trait only exposes reads.
pub trait FileSystem {
    /// Read a whole file.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Directory the process was started in.
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Names of the directories directly inside `path`.
    fn subdirectories(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Read a whole file as text, replacing invalid UTF-8.
    fn read_to_string_lossy(&self, path: &Path) -> io::Result<String> {
        self.read(path)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// The host file system
#[derive(Debug, Default, Clone, Copy)]
pub struct HostFs;

impl FileSystem for HostFs {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn subdirectories(&self, path: &Path) -> io::Result<Vec<String>> {
        let walker = WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true);

        let mut names = Vec::new();
        for entry in walker {
            let entry = entry.map_err(io::Error::from)?;
            if entry.file_type().is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }
}

/// File system rooted in a real directory tree but with a fixed working directory.
///
/// Lets resolution run against a temporary tree without changing the
/// process-wide current directory.
#[derive(Debug, Clone)]
pub struct PinnedCwdFs {
    cwd: PathBuf,
}

impl PinnedCwdFs {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }
}

impl FileSystem for PinnedCwdFs {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        HostFs.read(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.cwd.clone())
    }

    fn subdirectories(&self, path: &Path) -> io::Result<Vec<String>> {
        HostFs.subdirectories(path)
    }
}
