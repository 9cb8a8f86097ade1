use clap::Parser;

/// Arguments for the ls command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List versions for the selected architecture:\n    iodist ls\n\n\
                  List 64-bit versions:\n    IODIST_X64=1 iodist ls")]
pub struct ListArgs {
    /// Print only version names, one per line
    #[arg(long, short = 'q')]
    pub quiet: bool,
}
