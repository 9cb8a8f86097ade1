//! CLI definitions for the `iodist` inspector, using clap derive API
//!
//! Every command is read-only. Argument types live in submodules:
//! - current: Current command arguments
//! - list: Ls command arguments
//! - default_args: Args command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod current;
pub mod default_args;
pub mod list;

pub use completions::CompletionsArgs;
pub use current::CurrentArgs;
pub use default_args::DefaultArgsArgs;
pub use list::ListArgs;

/// iodist - inspect which runtime version the iojs shim would run
#[derive(Parser, Debug)]
#[command(
    name = "iodist",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Inspect iodist version selection",
    long_about = "Shows which runtime version the iojs shim resolves for the current directory \
                  and environment, where the choice came from, and what is installed under \
                  IODIST_PREFIX. Nothing is installed or modified.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  iodist current              \x1b[90m# Version, source and executable\x1b[0m\n   \
                  iodist current --json       \x1b[90m# Same, machine-readable\x1b[0m\n   \
                  iodist which                \x1b[90m# Path of the runtime the shim would run\x1b[0m\n   \
                  iodist ls                   \x1b[90m# Installed versions\x1b[0m\n   \
                  iodist -C ../app current    \x1b[90m# Resolve as if run from ../app\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Resolve as if run from this directory (defaults to current directory)
    #[arg(long = "dir", short = 'C', global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Print each resolution step to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the resolved version and where it came from
    Current(CurrentArgs),

    /// Print the path of the runtime executable the shim would run
    Which,

    /// List installed versions
    #[command(name = "ls", alias = "list")]
    Ls(ListArgs),

    /// Show the persisted default arguments of a version
    Args(DefaultArgsArgs),

    /// Show the global version
    Global,

    /// Show the nearest local version file
    Local,

    /// Show the version set in the environment
    Env,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_current() {
        let cli = Cli::try_parse_from(["iodist", "current"]).unwrap();
        match cli.command {
            Commands::Current(args) => assert!(!args.json),
            _ => panic!("Expected Current command"),
        }
    }

    #[test]
    fn test_cli_parsing_current_json() {
        let cli = Cli::try_parse_from(["iodist", "current", "--json"]).unwrap();
        match cli.command {
            Commands::Current(args) => assert!(args.json),
            _ => panic!("Expected Current command"),
        }
    }

    #[test]
    fn test_cli_parsing_ls_alias() {
        let cli = Cli::try_parse_from(["iodist", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::Ls(_)));
    }

    #[test]
    fn test_cli_parsing_args_with_version() {
        let cli = Cli::try_parse_from(["iodist", "args", "1.8.1"]).unwrap();
        match cli.command {
            Commands::Args(args) => assert_eq!(args.version, Some("1.8.1".to_string())),
            _ => panic!("Expected Args command"),
        }
    }

    #[test]
    fn test_cli_parsing_args_without_version() {
        let cli = Cli::try_parse_from(["iodist", "args"]).unwrap();
        match cli.command {
            Commands::Args(args) => assert_eq!(args.version, None),
            _ => panic!("Expected Args command"),
        }
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from(["iodist", "-v", "-C", "/tmp/project", "which"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/project")));
        assert!(matches!(cli.command, Commands::Which));
    }

    #[test]
    fn test_cli_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["iodist", "ls", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["iodist", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["iodist"]).is_err());
    }
}
