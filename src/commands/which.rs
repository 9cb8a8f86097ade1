//! Which command implementation

use std::io::Write;

use crate::common::env::Environment;
use crate::common::fs::FileSystem;
use crate::error::Result;

use super::Context;

/// Print the executable the shim would run. Existence is not checked.
pub fn run<E, F>(ctx: &Context<E, F>, out: &mut impl Write) -> Result<()>
where
    E: Environment,
    F: FileSystem,
{
    let config = ctx.resolve()?;
    writeln!(out, "{}", dunce::simplified(&config.executable).display())?;
    Ok(())
}
