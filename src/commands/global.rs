//! Global command implementation

use std::io::{self, Write};

use crate::common::env::Environment;
use crate::common::fs::FileSystem;
use crate::error::{self, IodistError, Result};
use crate::version;

use super::Context;

/// Print the version in the global marker.
///
/// A missing or blank marker means no global version; any other read error
/// is reported as is.
pub fn run<E, F>(ctx: &Context<E, F>, out: &mut impl Write) -> Result<()>
where
    E: Environment,
    F: FileSystem,
{
    let path = ctx.layout()?.global_marker();
    let contents = match ctx.fs.read_to_string_lossy(&path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => String::new(),
        Err(err) => return Err(error::version::marker_read_failed(&path, &err)),
    };
    let version = version::normalize(&contents).ok_or_else(|| IodistError::NoGlobalVersion {
        path: path.display().to_string(),
    })?;

    writeln!(out, "{version}")?;
    Ok(())
}
