//! Launch configuration
//!
//! [`ShimConfig::resolve`] runs the prerequisite check, version resolution,
//! architecture selection and path building once, and returns an immutable
//! value that the launcher consumes.

use std::ffi::OsString;
use std::path::PathBuf;

use serde::Serialize;

use crate::arch::Arch;
use crate::args;
use crate::common::env::{Environment, PREFIX_VAR};
use crate::common::fs::FileSystem;
use crate::error::{Result, prefix};
use crate::layout::InstallLayout;
use crate::ui::ResolutionReporter;
use crate::version::{self, ResolvedVersion};

/// Installation root named by `IODIST_PREFIX`.
///
/// Checked before anything else is read.
pub fn install_layout(env: &impl Environment) -> Result<InstallLayout> {
    env.var_os(PREFIX_VAR)
        .filter(|prefix| !prefix.is_empty())
        .map(InstallLayout::new)
        .ok_or_else(prefix::missing)
}

/// Everything needed to start the runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShimConfig {
    pub prefix: PathBuf,
    #[serde(flatten)]
    pub resolved: ResolvedVersion,
    pub arch: Arch,
    pub version_dir: PathBuf,
    pub executable: PathBuf,
    /// Tokens from the version's `args` file.
    pub persisted_args: Vec<String>,
}

impl ShimConfig {
    /// Assemble the configuration from the environment and file system.
    ///
    /// Does not check that the executable exists.
    pub fn resolve<E, F, R>(env: &E, fs: &F, reporter: &mut R) -> Result<Self>
    where
        E: Environment,
        F: FileSystem,
        R: ResolutionReporter + ?Sized,
    {
        let layout = install_layout(env)?;
        Self::resolve_in(layout, env, fs, reporter)
    }

    /// Like [`ShimConfig::resolve`], for a prefix that was already checked.
    pub fn resolve_in<E, F, R>(
        layout: InstallLayout,
        env: &E,
        fs: &F,
        reporter: &mut R,
    ) -> Result<Self>
    where
        E: Environment,
        F: FileSystem,
        R: ResolutionReporter + ?Sized,
    {
        let resolved = version::resolve(env, fs, &layout, reporter)?;

        let arch = Arch::select(env);
        reporter.arch_selected(arch);

        let version_dir = layout.version_dir(arch, &resolved.version);
        let executable = layout.executable(arch, &resolved.version);
        let persisted_args =
            args::read_persisted(fs, &layout.args_file(arch, &resolved.version));

        Ok(Self {
            prefix: layout.root().to_path_buf(),
            resolved,
            arch,
            version_dir,
            executable,
            persisted_args,
        })
    }

    pub fn version(&self) -> &str {
        &self.resolved.version
    }

    /// Final argument vector for the given caller arguments.
    pub fn command_line<I>(&self, caller: I) -> Vec<OsString>
    where
        I: IntoIterator<Item = OsString>,
    {
        args::compose(&self.persisted_args, caller)
    }
}
