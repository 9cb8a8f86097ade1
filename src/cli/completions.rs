use clap::Parser;

/// Arguments of `iodist completions`
#[derive(Parser, Debug)]
#[command(after_help = "Completions cover the iodist inspector only; the iojs shim forwards \
                  every argument to the runtime.\n\n\
                  Install them once per shell:\n  \
                  bash   iodist completions bash > /etc/bash_completion.d/iodist\n  \
                  zsh    iodist completions zsh > \"${fpath[1]}/_iodist\"\n  \
                  fish   iodist completions fish > ~/.config/fish/completions/iodist.fish\n  \
                  pwsh   iodist completions pwsh >> $PROFILE")]
pub struct CompletionsArgs {
    /// Target shell: bash, elvish, fish, powershell (or pwsh), zsh
    pub shell: String,
}
