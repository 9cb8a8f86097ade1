//! Argument vector composition
//!
//! A version directory may carry an `args` file whose space-separated tokens
//! are passed to the runtime before the caller's own arguments.

use std::ffi::OsString;
use std::path::Path;

use crate::common::fs::FileSystem;

/// Split persisted arguments on single spaces.
///
/// Splitting is literal: consecutive spaces produce empty tokens and no
/// trimming is applied.
pub fn parse_persisted(contents: &str) -> Vec<String> {
    if contents.is_empty() {
        return Vec::new();
    }
    contents.split(' ').map(str::to_string).collect()
}

/// Read the persisted arguments at `path`.
///
/// A missing, unreadable or empty file yields no arguments.
pub fn read_persisted(fs: &impl FileSystem, path: &Path) -> Vec<String> {
    match fs.read(path) {
        Ok(bytes) if !bytes.is_empty() => parse_persisted(&String::from_utf8_lossy(&bytes)),
        _ => Vec::new(),
    }
}

/// Persisted arguments first, then the caller's arguments in order.
pub fn compose<I>(persisted: &[String], caller: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    persisted
        .iter()
        .map(OsString::from)
        .chain(caller)
        .collect()
}
