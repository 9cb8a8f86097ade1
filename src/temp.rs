//! Base directory for temporary trees created by tests.
//!
//! The local-marker walk climbs from the working directory, so test trees must
//! never end up under the repository checkout (e.g. when `TMPDIR=tmp`).

use std::env;
use std::path::PathBuf;

/// Absolute, symlink-free directory to create temporary trees in.
///
/// Resolving symlinks keeps paths reported by the walk comparable with the
/// paths tests build (`/tmp` is a symlink on macOS).
pub fn temp_dir_base() -> PathBuf {
    let mut base = env::temp_dir();
    if !base.is_absolute() {
        base = if cfg!(windows) {
            env::var_os("TEMP")
                .or_else(|| env::var_os("TMP"))
                .map_or_else(|| PathBuf::from(r"C:\Windows\Temp"), PathBuf::from)
        } else {
            PathBuf::from("/tmp")
        };
    }
    dunce::canonicalize(&base).unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_base_is_absolute() {
        assert!(temp_dir_base().is_absolute());
    }
}
