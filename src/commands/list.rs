//! Ls command implementation
//!
//! Lists installed versions of the selected architecture and marks the one
//! the shim would run.

use std::io::Write;

use console::Style;

use crate::arch::Arch;
use crate::cli::ListArgs;
use crate::common::env::Environment;
use crate::common::fs::FileSystem;
use crate::error::Result;
use crate::layout;

use super::Context;

/// Run ls command
pub fn run<E, F>(ctx: &Context<E, F>, args: &ListArgs, out: &mut impl Write) -> Result<()>
where
    E: Environment,
    F: FileSystem,
{
    let layout = ctx.layout()?;
    let arch = Arch::select(&ctx.env);
    let versions = layout::installed_versions(&ctx.fs, &layout, arch)?;

    if args.quiet {
        for version in &versions {
            writeln!(out, "{version}")?;
        }
        return Ok(());
    }

    if versions.is_empty() {
        writeln!(out, "No versions installed ({arch}).")?;
        return Ok(());
    }

    // A failed resolution only means nothing is marked
    let active = ctx.resolve().ok().map(|config| config.resolved.version);

    writeln!(out, "Installed versions ({arch}, {}):", versions.len())?;
    for version in &versions {
        if active.as_deref() == Some(version.as_str()) {
            writeln!(
                out,
                "{} {}",
                Style::new().green().bold().apply_to("*"),
                Style::new().bold().yellow().apply_to(version)
            )?;
        } else {
            writeln!(out, "  {version}")?;
        }
    }

    Ok(())
}
