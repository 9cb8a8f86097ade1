//! Diagnostics presentation layer
//!
//! Resolution steps are reported through the [`ResolutionReporter`] trait:
//! - [`VerboseReporter`] prints each step to stderr (`IODIST_VERBOSE=1` for the
//!   shim, `--verbose` for the inspector)
//! - [`SilentReporter`] prints nothing, the default
//!
//! Fatal errors are not reported here; the binaries print them on exit.

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

use console::{Style, Term};

use crate::arch::Arch;
use crate::common::env::{Environment, VERBOSE_VAR};
use crate::error::IodistError;
use crate::version::{ResolvedVersion, VersionSource};

/// Receives progress of the resolution pipeline
pub trait ResolutionReporter {
    /// A version source yielded no value.
    fn source_skipped(&mut self, source: VersionSource);

    /// A version source could not be read; resolution moves on.
    fn source_failed(&mut self, source: VersionSource, error: &IodistError);

    fn version_resolved(&mut self, resolved: &ResolvedVersion);

    fn arch_selected(&mut self, arch: Arch);

    /// About to start the runtime.
    fn launching(&mut self, executable: &Path, args: &[OsString]);
}

/// Whether `IODIST_VERBOSE` asks for diagnostics.
pub fn verbose_requested(env: &impl Environment) -> bool {
    env.var(VERBOSE_VAR).as_deref() == Some("1")
}

/// Pick the reporter the shim runs with.
pub fn reporter_for(env: &impl Environment) -> Box<dyn ResolutionReporter> {
    if verbose_requested(env) {
        Box::new(VerboseReporter::stderr())
    } else {
        Box::new(SilentReporter)
    }
}

/// Reporter that writes one styled line per step
pub struct VerboseReporter<W: Write> {
    out: W,
    label: Style,
    warn: Style,
}

impl VerboseReporter<Term> {
    pub fn stderr() -> Self {
        Self::new(Term::stderr())
    }
}

impl<W: Write> VerboseReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            label: Style::new().cyan().bold(),
            warn: Style::new().yellow(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, message: &str) {
        // Diagnostics must never fail the launch
        let _ = writeln!(self.out, "{} {message}", self.label.apply_to("iodist:"));
    }
}

impl<W: Write> ResolutionReporter for VerboseReporter<W> {
    fn source_skipped(&mut self, source: VersionSource) {
        self.line(&format!("{source}: no version"));
    }

    fn source_failed(&mut self, source: VersionSource, error: &IodistError) {
        let message = self
            .warn
            .apply_to(format!("{source}: {error}"))
            .to_string();
        self.line(&message);
    }

    fn version_resolved(&mut self, resolved: &ResolvedVersion) {
        match &resolved.marker {
            Some(path) => self.line(&format!(
                "using {} from {} ({})",
                resolved.version,
                resolved.source,
                path.display()
            )),
            None => self.line(&format!(
                "using {} from {}",
                resolved.version, resolved.source
            )),
        }
    }

    fn arch_selected(&mut self, arch: Arch) {
        self.line(&format!("architecture {arch}"));
    }

    fn launching(&mut self, executable: &Path, args: &[OsString]) {
        self.line(&format!(
            "exec {} {args:?}",
            dunce::simplified(executable).display()
        ));
    }
}

/// Reporter that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl ResolutionReporter for SilentReporter {
    fn source_skipped(&mut self, _source: VersionSource) {
        // No-op for silent mode
    }

    fn source_failed(&mut self, _source: VersionSource, _error: &IodistError) {
        // No-op for silent mode
    }

    fn version_resolved(&mut self, _resolved: &ResolvedVersion) {
        // No-op for silent mode
    }

    fn arch_selected(&mut self, _arch: Arch) {
        // No-op for silent mode
    }

    fn launching(&mut self, _executable: &Path, _args: &[OsString]) {
        // No-op for silent mode
    }
}
