//! Shell completions command

use std::io::Write;

use clap::CommandFactory;

use crate::cli::CompletionsArgs;
use crate::error::{IodistError, Result};

/// Generate shell completions
pub fn run(args: &CompletionsArgs, out: &mut impl Write) -> Result<()> {
    let shell = match args.shell.to_lowercase().as_str() {
        "bash" => clap_complete::Shell::Bash,
        "elvish" => clap_complete::Shell::Elvish,
        "fish" => clap_complete::Shell::Fish,
        "powershell" | "pwsh" => clap_complete::Shell::PowerShell,
        "zsh" => clap_complete::Shell::Zsh,
        _ => {
            return Err(IodistError::UnknownShell {
                shell: args.shell.clone(),
            });
        }
    };

    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "iodist", out);

    Ok(())
}
