//! Args command implementation
//!
//! Shows the persisted default arguments the shim prepends for a version.

use std::io::Write;

use crate::arch::Arch;
use crate::args;
use crate::cli::DefaultArgsArgs;
use crate::common::env::Environment;
use crate::common::fs::FileSystem;
use crate::error::{self, IodistError, Result};
use crate::version;

use super::Context;

/// Run args command
pub fn run<E, F>(
    ctx: &Context<E, F>,
    cmd_args: &DefaultArgsArgs,
    out: &mut impl Write,
) -> Result<()>
where
    E: Environment,
    F: FileSystem,
{
    let layout = ctx.layout()?;
    let (version, arch) = match cmd_args.version.as_deref() {
        Some(raw) => {
            let version = version::normalize(raw).ok_or_else(|| error::version::invalid(raw))?;
            (version, Arch::select(&ctx.env))
        }
        None => {
            let config = ctx.resolve()?;
            (config.version().to_string(), config.arch)
        }
    };

    let path = layout.args_file(arch, &version);
    let persisted = args::read_persisted(&ctx.fs, &path);
    if persisted.is_empty() {
        return Err(IodistError::ArgsNotFound { version });
    }

    for token in &persisted {
        writeln!(out, "{token}")?;
    }
    Ok(())
}
