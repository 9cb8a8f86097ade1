//! Env command implementation

use std::io::Write;

use crate::common::env::Environment;
use crate::common::fs::FileSystem;
use crate::error::{IodistError, Result};
use crate::version;

use super::Context;

/// Print the version named by `IOJS_VERSION` or `IODIST_VERSION`
pub fn run<E, F>(ctx: &Context<E, F>, out: &mut impl Write) -> Result<()>
where
    E: Environment,
    F: FileSystem,
{
    let resolved = version::from_env(&ctx.env).ok_or(IodistError::NoEnvVersion)?;
    writeln!(out, "{}\t{}", resolved.version, resolved.source)?;
    Ok(())
}
