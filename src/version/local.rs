//! Project-local version marker discovery
//!
//! Walks from the working directory towards the filesystem root looking for a
//! `.node-version` file. The root itself is never probed.

use std::io;
use std::path::{Path, PathBuf};

use crate::common::fs::FileSystem;
use crate::error::{Result, version};
use crate::layout::VERSION_MARKER;

/// A local marker file and its raw contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalMarker {
    pub path: PathBuf,
    pub contents: String,
}

/// Find the nearest marker starting at the current working directory.
pub fn find(fs: &impl FileSystem) -> Result<Option<LocalMarker>> {
    let cwd = fs.current_dir()?;
    find_from(fs, &cwd)
}

/// Find the nearest marker starting at `start`.
///
/// Returns the first marker that can be read, even if it is empty. A missing
/// marker moves the search one level up; any other read error ends it.
pub fn find_from(fs: &impl FileSystem, start: &Path) -> Result<Option<LocalMarker>> {
    for dir in start.ancestors() {
        if dir.parent().is_none() {
            break;
        }

        let path = dir.join(VERSION_MARKER);
        match fs.read_to_string_lossy(&path) {
            Ok(contents) => return Ok(Some(LocalMarker { path, contents })),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(version::marker_read_failed(&path, &err)),
        }
    }

    Ok(None)
}
