//! Version resolution errors

use std::path::Path;

use super::IodistError;

/// Creates an unresolved version error
pub fn unresolved() -> IodistError {
    IodistError::UnresolvedVersion
}

/// Creates an error for a version argument that is blank after normalization
pub fn invalid(value: &str) -> IodistError {
    IodistError::InvalidVersion {
        value: value.to_string(),
    }
}

/// Creates a marker read error for a file that exists but could not be read
pub fn marker_read_failed(path: &Path, err: &std::io::Error) -> IodistError {
    IodistError::MarkerReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
