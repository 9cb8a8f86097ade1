//! iodist - read-only inspector for the iojs shim's version selection

use clap::Parser;

use iodist::cli::{Cli, Commands};
use iodist::commands::{self, Context};
use iodist::common::env::ProcessEnv;
use iodist::error::Result;

fn run(cli: Cli) -> Result<()> {
    let ctx = Context::from_dir(ProcessEnv, cli.dir.as_deref(), cli.verbose)?;
    let stdout = std::io::stdout();
    let out = &mut stdout.lock();

    match cli.command {
        Commands::Current(args) => commands::current::run(&ctx, &args, out),
        Commands::Which => commands::which::run(&ctx, out),
        Commands::Ls(args) => commands::list::run(&ctx, &args, out),
        Commands::Args(args) => commands::default_args::run(&ctx, &args, out),
        Commands::Global => commands::global::run(&ctx, out),
        Commands::Local => commands::local::run(&ctx, out),
        Commands::Env => commands::env::run(&ctx, out),
        Commands::Version => commands::version::run(out),
        Commands::Completions(args) => commands::completions::run(&args, out),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
