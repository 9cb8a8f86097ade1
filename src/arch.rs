//! Architecture selection
//!
//! iodist keeps two parallel installation trees: `v/` for the base variant and
//! `v-x64/` for 64-bit builds.

use std::fmt;

use serde::Serialize;

use crate::common::env::{Environment, PROCESSOR_ARCH_VAR, X64_OVERRIDE_VAR};

/// Value of `PROCESSOR_ARCHITECTURE` that selects the 64-bit tree by default.
pub const X64_PROCESSOR_TOKEN: &str = "x64";

/// Installation tree variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    Base,
    X64,
}

impl Arch {
    /// Pick the variant from the environment.
    ///
    /// A non-empty `IODIST_X64` always wins over `PROCESSOR_ARCHITECTURE`.
    pub fn select(env: &impl Environment) -> Self {
        let x64 = match env.non_empty(X64_OVERRIDE_VAR) {
            Some(wanted) => wanted == "1",
            None => env.var(PROCESSOR_ARCH_VAR).as_deref() == Some(X64_PROCESSOR_TOKEN),
        };
        if x64 { Arch::X64 } else { Arch::Base }
    }

    /// Directory name of this variant's tree under the installation root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Arch::Base => "v",
            Arch::X64 => "v-x64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arch::Base => write!(f, "base"),
            Arch::X64 => write!(f, "x64"),
        }
    }
}
