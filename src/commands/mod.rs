//! Command implementations for the iodist CLI
//!
//! Commands write their normal output to the writer they are given and
//! return errors to the entry point, which prints them.

pub mod completions;
pub mod current;
pub mod default_args;
pub mod env;
pub mod global;
pub mod list;
pub mod local;
pub mod version;
pub mod which;

use std::path::{Path, PathBuf};

use crate::common::env::Environment;
use crate::common::fs::{FileSystem, PinnedCwdFs};
use crate::config::{self, ShimConfig};
use crate::error::Result;
use crate::layout::InstallLayout;
use crate::ui::{ResolutionReporter, SilentReporter, VerboseReporter};

/// Collaborators shared by every command
pub struct Context<E, F> {
    pub env: E,
    pub fs: F,
    pub verbose: bool,
}

impl<E: Environment> Context<E, PinnedCwdFs> {
    /// Context that resolves as if run from `dir`, or from the process working
    /// directory when no directory is given.
    pub fn from_dir(env: E, dir: Option<&Path>, verbose: bool) -> Result<Self> {
        let cwd = match dir {
            Some(dir) => std::path::absolute(dir)?,
            None => std::env::current_dir()?,
        };
        Ok(Self {
            env,
            fs: PinnedCwdFs::new(cwd),
            verbose,
        })
    }
}

impl<E: Environment, F: FileSystem> Context<E, F> {
    pub fn reporter(&self) -> Box<dyn ResolutionReporter> {
        if self.verbose {
            Box::new(VerboseReporter::stderr())
        } else {
            Box::new(SilentReporter)
        }
    }

    pub fn layout(&self) -> Result<InstallLayout> {
        config::install_layout(&self.env)
    }

    /// Run the same resolution the shim runs, without launching.
    pub fn resolve(&self) -> Result<ShimConfig> {
        let mut reporter = self.reporter();
        ShimConfig::resolve(&self.env, &self.fs, reporter.as_mut())
    }

    pub fn working_dir(&self) -> Result<PathBuf> {
        Ok(self.fs.current_dir()?)
    }
}
