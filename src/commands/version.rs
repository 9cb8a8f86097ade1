//! Version command implementation

use std::io::Write;

use crate::error::Result;

/// Run version command
pub fn run(out: &mut impl Write) -> Result<()> {
    writeln!(out, "iodist {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out)?;
    writeln!(out, "Build info:")?;
    writeln!(out, "  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"))?;
    writeln!(out, "  Profile: {}", build_profile())?;
    writeln!(out, "  Runtime binary: {}", crate::layout::RUNTIME_BINARY)?;

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
