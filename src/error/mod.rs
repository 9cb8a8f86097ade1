//! Error types and handling for iodist
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Every variant maps onto the process exit code the shim terminates with, see
//! [`IodistError::exit_code`]. The launched child's own exit code never passes
//! through this type.

pub mod launch;
pub mod prefix;
pub mod version;


use miette::Diagnostic;
use thiserror::Error;

/// Exit code used when `IODIST_PREFIX` is missing or empty.
pub const EXIT_MISSING_PREFIX: i32 = 40;

/// Exit code used when no source yields a version.
pub const EXIT_UNRESOLVED_VERSION: i32 = 41;

/// Exit code used when the runtime could not be launched.
pub const EXIT_LAUNCH_FAILED: i32 = 42;

/// Exit code for everything else (inspector CLI only).
pub const EXIT_GENERAL: i32 = 1;

/// Main error type for iodist operations
#[derive(Error, Diagnostic, Debug)]
pub enum IodistError {
    // Prerequisite errors
    #[error(
        "Please set the path to the iodist directory in the IODIST_PREFIX environment variable."
    )]
    #[diagnostic(
        code(iodist::prefix::missing),
        help("IODIST_PREFIX must point at the iodist installation directory")
    )]
    MissingPrefix,

    // Version resolution errors
    #[error(
        "Sorry, there's a problem with iodist. Couldn't decide which node version to use. Please set a version."
    )]
    #[diagnostic(
        code(iodist::version::unresolved),
        help("Set IOJS_VERSION or IODIST_VERSION, or write a version into a .node-version file")
    )]
    UnresolvedVersion,

    #[error("Not a version: {value:?}")]
    #[diagnostic(
        code(iodist::version::invalid),
        help("Pass a version such as 1.8.1 or v1.8.1")
    )]
    InvalidVersion { value: String },

    #[error("Failed to read version marker: {path}: {reason}")]
    #[diagnostic(code(iodist::version::marker_read_failed))]
    MarkerReadFailed { path: String, reason: String },

    // Launch errors
    #[error("Sorry, there's a problem with iodist.\nError: {reason}")]
    #[diagnostic(
        code(iodist::launch::failed),
        help("Check that the selected version is installed under IODIST_PREFIX")
    )]
    LaunchFailed { path: String, reason: String },

    // Inspector errors
    #[error("Version directory not readable: {path}: {reason}")]
    #[diagnostic(code(iodist::layout::read_failed))]
    VersionDirReadFailed { path: String, reason: String },

    #[error("No default arguments stored for version {version}")]
    #[diagnostic(code(iodist::args::not_found))]
    ArgsNotFound { version: String },

    #[error("No global version set in {path}")]
    #[diagnostic(
        code(iodist::version::no_global),
        help("Write a version into the .node-version file under IODIST_PREFIX")
    )]
    NoGlobalVersion { path: String },

    #[error("No local .node-version file found from {path}")]
    #[diagnostic(code(iodist::version::no_local))]
    NoLocalVersion { path: String },

    #[error("No version set in IOJS_VERSION or IODIST_VERSION")]
    #[diagnostic(code(iodist::version::no_env))]
    NoEnvVersion,

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(iodist::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    #[error("Failed to serialize output: {reason}")]
    #[diagnostic(code(iodist::cli::serialize_failed))]
    SerializeFailed { reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(iodist::fs::io_error))]
    IoError { message: String },
}

impl IodistError {
    /// Process exit code that represents this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            IodistError::MissingPrefix => EXIT_MISSING_PREFIX,
            IodistError::UnresolvedVersion => EXIT_UNRESOLVED_VERSION,
            IodistError::LaunchFailed { .. } => EXIT_LAUNCH_FAILED,
            _ => EXIT_GENERAL,
        }
    }
}

impl From<std::io::Error> for IodistError {
    fn from(err: std::io::Error) -> Self {
        IodistError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for IodistError {
    fn from(err: serde_json::Error) -> Self {
        IodistError::SerializeFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, IodistError>;
