//! Prerequisite errors

use super::IodistError;

/// Creates a missing installation root error
pub fn missing() -> IodistError {
    IodistError::MissingPrefix
}
