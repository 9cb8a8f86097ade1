//! iodist - version-dispatch shim
//!
//! Decides which installed runtime version to run for the current directory
//! and environment, then runs it with the caller's arguments and exits with
//! its exit code. The `iodist` binary exposes the same resolution read-only.

pub mod arch;
pub mod args;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod launcher;
pub mod layout;
pub mod shim;
pub mod ui;
pub mod version;

#[cfg(test)]
mod temp;
#[cfg(test)]
mod test_fixtures;

pub use config::ShimConfig;
pub use error::{IodistError, Result};
