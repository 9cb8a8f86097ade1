//! Runtime launcher
//!
//! Starts the resolved executable with inherited stdio, waits for it, and
//! turns its termination status into the exit code the shim exits with.

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{EXIT_LAUNCH_FAILED, Result, launch};

/// Run `executable` and return the exit code to propagate.
pub fn launch(executable: &Path, args: &[OsString]) -> Result<i32> {
    launch_with_executor(executable, args, Command::status)
}

/// Like [`launch`], with the spawn-and-wait step supplied by the caller.
pub fn launch_with_executor(
    executable: &Path,
    args: &[OsString],
    mut exec: impl FnMut(&mut Command) -> io::Result<ExitStatus>,
) -> Result<i32> {
    let mut cmd = Command::new(executable);
    cmd.args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let status = exec(&mut cmd).map_err(|err| launch::failed(executable, &err))?;
    Ok(exit_code(status))
}

/// Exit code that reproduces `status` for our own caller.
///
/// A child killed by a signal has no exit code; it is reported the way shells
/// do, as `128 + signal`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    EXIT_LAUNCH_FAILED
}
