//! Read-only collaborators shared by the shim and the inspector CLI.
//!
//! Configuration is assembled from the process environment and the host
//! filesystem through the [`env::Environment`] and [`fs::FileSystem`] traits,
//! so that tests can substitute fixed values for both.

pub mod env;
pub mod fs;
