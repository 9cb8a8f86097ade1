//! Environment variable access

use std::collections::HashMap;
use std::ffi::OsString;

/// Installation root of iodist. Required.
pub const PREFIX_VAR: &str = "IODIST_PREFIX";

/// Per-invocation version override.
pub const INVOCATION_VERSION_VAR: &str = "IOJS_VERSION";

/// Session-level default version.
pub const SESSION_VERSION_VAR: &str = "IODIST_VERSION";

/// Processor architecture reported by the host.
pub const PROCESSOR_ARCH_VAR: &str = "PROCESSOR_ARCHITECTURE";

/// Explicit 64-bit override: `1` forces 64-bit, anything else forces the base variant.
pub const X64_OVERRIDE_VAR: &str = "IODIST_X64";

/// Enables resolution diagnostics on stderr when set to `1`.
pub const VERBOSE_VAR: &str = "IODIST_VERBOSE";

/// Read-only view of environment variables
pub trait Environment {
    /// Raw value of `key`, `None` when unset.
    fn var(&self, key: &str) -> Option<String>;

    /// Raw value of `key` without any UTF-8 conversion.
    ///
    /// Used for values that become paths.
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.var(key).map(OsString::from)
    }

    /// Value of `key`, treating an empty value the same as an unset one.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }
}

/// The environment of the running process
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }

    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

/// Fixed set of variables, used by tests and by callers that snapshot the environment.
#[derive(Debug, Default, Clone)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

impl Environment for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_env_unset_is_none() {
        let env = MapEnv::new();
        assert_eq!(env.var(PREFIX_VAR), None);
    }

    #[test]
    fn test_non_empty_filters_empty_values() {
        let env = MapEnv::new().with(PREFIX_VAR, "");
        assert_eq!(env.var(PREFIX_VAR), Some(String::new()));
        assert_eq!(env.non_empty(PREFIX_VAR), None);
    }

    #[test]
    fn test_non_empty_keeps_whitespace() {
        let env = MapEnv::new().with(SESSION_VERSION_VAR, " ");
        assert_eq!(env.non_empty(SESSION_VERSION_VAR), Some(" ".to_string()));
    }

    #[test]
    fn test_map_env_var_os() {
        let env = MapEnv::new().with(PREFIX_VAR, "/opt/iodist");
        assert_eq!(env.var_os(PREFIX_VAR), Some(OsString::from("/opt/iodist")));
        assert_eq!(env.var_os(SESSION_VERSION_VAR), None);
    }

    #[test]
    fn test_process_env_reads_path() {
        // PATH is set in every test environment we run in
        assert!(ProcessEnv.var("PATH").is_some());
    }
}
