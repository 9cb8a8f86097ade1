//! Version resolution
//!
//! The version to launch comes from the first of these sources that yields a
//! non-empty value:
//!
//! 1. `IOJS_VERSION`, a per-invocation override
//! 2. `IODIST_VERSION`, the session default
//! 3. the nearest `.node-version` above the working directory
//! 4. `.node-version` directly under the installation root
//!
//! Values are normalized with [`normalize`] before they are compared against
//! "empty". Sources are never merged.

pub mod local;

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::common::env::{Environment, INVOCATION_VERSION_VAR, SESSION_VERSION_VAR};
use crate::common::fs::FileSystem;
use crate::error::{Result, version};
use crate::layout::InstallLayout;
use crate::ui::ResolutionReporter;

/// Where a resolved version came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionSource {
    InvocationEnv,
    SessionEnv,
    LocalMarker,
    GlobalMarker,
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionSource::InvocationEnv => write!(f, "{INVOCATION_VERSION_VAR}"),
            VersionSource::SessionEnv => write!(f, "{SESSION_VERSION_VAR}"),
            VersionSource::LocalMarker => write!(f, "local .node-version"),
            VersionSource::GlobalMarker => write!(f, "global .node-version"),
        }
    }
}

/// The version chosen for this run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedVersion {
    pub version: String,
    pub source: VersionSource,
    /// Marker file the version was read from, for the two marker sources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<PathBuf>,
}

fn is_marker_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Strip leading `v` characters and surrounding whitespace.
///
/// Returns `None` when nothing is left.
///
/// ```
/// use iodist::version::normalize;
///
/// assert_eq!(normalize(" v1.8.1\r\n"), Some("1.8.1".to_string()));
/// assert_eq!(normalize("\n"), None);
/// ```
pub fn normalize(raw: &str) -> Option<String> {
    let version = raw
        .trim_start_matches(|c| c == 'v' || is_marker_whitespace(c))
        .trim_end_matches(is_marker_whitespace);
    (!version.is_empty()).then(|| version.to_string())
}

/// Version named by the environment alone (sources 1 and 2).
pub fn from_env(env: &impl Environment) -> Option<ResolvedVersion> {
    [
        (INVOCATION_VERSION_VAR, VersionSource::InvocationEnv),
        (SESSION_VERSION_VAR, VersionSource::SessionEnv),
    ]
    .into_iter()
    .find_map(|(var, source)| {
        let version = env.var(var).as_deref().and_then(normalize)?;
        Some(ResolvedVersion {
            version,
            source,
            marker: None,
        })
    })
}

/// Resolve the version to launch.
///
/// A read error during the local walk is reported and resolution continues
/// with the global marker.
pub fn resolve<E, F, R>(
    env: &E,
    fs: &F,
    layout: &InstallLayout,
    reporter: &mut R,
) -> Result<ResolvedVersion>
where
    E: Environment,
    F: FileSystem,
    R: ResolutionReporter + ?Sized,
{
    let resolved = if let Some(resolved) = from_env(env) {
        resolved
    } else if let Some(resolved) = from_local_marker(fs, reporter) {
        resolved
    } else {
        from_global_marker(fs, layout, reporter)?
    };

    reporter.version_resolved(&resolved);
    Ok(resolved)
}

fn from_local_marker<F, R>(fs: &F, reporter: &mut R) -> Option<ResolvedVersion>
where
    F: FileSystem,
    R: ResolutionReporter + ?Sized,
{
    match local::find(fs) {
        Ok(Some(marker)) => {
            if let Some(version) = normalize(&marker.contents) {
                return Some(ResolvedVersion {
                    version,
                    source: VersionSource::LocalMarker,
                    marker: Some(marker.path),
                });
            }
            reporter.source_skipped(VersionSource::LocalMarker);
        }
        Ok(None) => reporter.source_skipped(VersionSource::LocalMarker),
        // TODO: decide whether a local read error should abort resolution instead of falling through
        Err(err) => reporter.source_failed(VersionSource::LocalMarker, &err),
    }
    None
}

fn from_global_marker<F, R>(
    fs: &F,
    layout: &InstallLayout,
    reporter: &mut R,
) -> Result<ResolvedVersion>
where
    F: FileSystem,
    R: ResolutionReporter + ?Sized,
{
    let path = layout.global_marker();
    match fs.read_to_string_lossy(&path) {
        Ok(contents) => {
            if let Some(version) = normalize(&contents) {
                return Ok(ResolvedVersion {
                    version,
                    source: VersionSource::GlobalMarker,
                    marker: Some(path),
                });
            }
            reporter.source_skipped(VersionSource::GlobalMarker);
        }
        Err(err) => {
            reporter.source_failed(
                VersionSource::GlobalMarker,
                &version::marker_read_failed(&path, &err),
            );
        }
    }
    Err(version::unresolved())
}
