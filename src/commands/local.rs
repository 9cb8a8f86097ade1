//! Local command implementation

use std::io::Write;

use crate::common::env::Environment;
use crate::common::fs::FileSystem;
use crate::error::{IodistError, Result};
use crate::version::{self, local};

use super::Context;

/// Print the nearest local marker and its version.
///
/// Does not need `IODIST_PREFIX`.
pub fn run<E, F>(ctx: &Context<E, F>, out: &mut impl Write) -> Result<()>
where
    E: Environment,
    F: FileSystem,
{
    let Some(marker) = local::find(&ctx.fs)? else {
        return Err(IodistError::NoLocalVersion {
            path: ctx.working_dir()?.display().to_string(),
        });
    };

    let version = version::normalize(&marker.contents).unwrap_or_else(|| "(empty)".to_string());
    writeln!(
        out,
        "{version}\t{}",
        dunce::simplified(&marker.path).display()
    )?;
    Ok(())
}
