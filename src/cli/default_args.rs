use clap::Parser;

/// Arguments for the args command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show default arguments of the resolved version:\n    iodist args\n\n\
                  Show default arguments of a specific version:\n    iodist args v1.8.1")]
pub struct DefaultArgsArgs {
    /// Version to inspect (defaults to the resolved version)
    pub version: Option<String>,
}
