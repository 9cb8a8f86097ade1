//! The `iojs` shim pipeline

use std::ffi::OsString;

use crate::common::env::Environment;
use crate::common::fs::FileSystem;
use crate::config::{self, ShimConfig};
use crate::error::Result;
use crate::launcher;
use crate::layout::InstallLayout;
use crate::ui::{self, ResolutionReporter};

/// Check the prefix, resolve, launch, and return the exit code the shim
/// should exit with.
///
/// `IODIST_PREFIX` is the first thing read; the reporter is only picked once it
/// is known to be set. `caller_args` are the shim's own arguments without the
/// program name.
pub fn run<E, F, I>(env: &E, fs: &F, caller_args: I) -> Result<i32>
where
    E: Environment,
    F: FileSystem,
    I: IntoIterator<Item = OsString>,
{
    let layout = config::install_layout(env)?;
    let mut reporter = ui::reporter_for(env);
    run_in(layout, env, fs, reporter.as_mut(), caller_args)
}

/// Resolve and launch under an already checked installation root.
pub fn run_in<E, F, R, I>(
    layout: InstallLayout,
    env: &E,
    fs: &F,
    reporter: &mut R,
    caller_args: I,
) -> Result<i32>
where
    E: Environment,
    F: FileSystem,
    R: ResolutionReporter + ?Sized,
    I: IntoIterator<Item = OsString>,
{
    let config = ShimConfig::resolve_in(layout, env, fs, reporter)?;
    let args = config.command_line(caller_args);
    reporter.launching(&config.executable, &args);
    launcher::launch(&config.executable, &args)
}
