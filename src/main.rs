//! iojs - runs the iodist-selected runtime version
//!
//! Takes no flags of its own: every argument is forwarded to the runtime.

use iodist::common::env::ProcessEnv;
use iodist::common::fs::HostFs;
use iodist::shim;

fn main() {
    let code = match shim::run(&ProcessEnv, &HostFs, std::env::args_os().skip(1)) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            e.exit_code()
        }
    };

    std::process::exit(code);
}
