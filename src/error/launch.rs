//! Launch errors

use std::path::Path;

use super::IodistError;

/// Creates a launch failure for the given executable
pub fn failed(path: &Path, err: &std::io::Error) -> IodistError {
    IodistError::LaunchFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
