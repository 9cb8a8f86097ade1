use clap::Parser;

/// Arguments for the current command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the resolved version:\n    iodist current\n\n\
                  Print JSON for scripts:\n    iodist current --json")]
pub struct CurrentArgs {
    /// Print the resolved configuration as JSON
    #[arg(long)]
    pub json: bool,
}
