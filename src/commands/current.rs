//! Current command implementation
//!
//! Shows what the shim would run from here: version, where the version came
//! from, architecture, executable and persisted arguments.

use std::io::Write;

use console::Style;

use crate::cli::CurrentArgs;
use crate::common::env::Environment;
use crate::common::fs::FileSystem;
use crate::config::ShimConfig;
use crate::error::Result;

use super::Context;

/// Run current command
pub fn run<E, F>(ctx: &Context<E, F>, args: &CurrentArgs, out: &mut impl Write) -> Result<()>
where
    E: Environment,
    F: FileSystem,
{
    let config = ctx.resolve()?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &config)?;
        writeln!(out)?;
        return Ok(());
    }

    display_config(&config, out)
}

fn display_config(config: &ShimConfig, out: &mut impl Write) -> Result<()> {
    let label = Style::new().bold();

    writeln!(
        out,
        "{} {}",
        label.apply_to("Version:"),
        Style::new().bold().yellow().apply_to(config.version())
    )?;
    match &config.resolved.marker {
        Some(path) => writeln!(
            out,
            "{} {} ({})",
            label.apply_to("Source:"),
            config.resolved.source,
            dunce::simplified(path).display()
        )?,
        None => writeln!(
            out,
            "{} {}",
            label.apply_to("Source:"),
            config.resolved.source
        )?,
    }
    writeln!(out, "{} {}", label.apply_to("Arch:"), config.arch)?;
    writeln!(
        out,
        "{} {}",
        label.apply_to("Executable:"),
        dunce::simplified(&config.executable).display()
    )?;
    if !config.persisted_args.is_empty() {
        writeln!(
            out,
            "{} {}",
            label.apply_to("Default args:"),
            config.persisted_args.join(" ")
        )?;
    }

    Ok(())
}
