// Author: Dustin Pilgrim
// License: MIT

mod cli;
mod config;
mod element;
mod logging;
mod paths;
mod print;
mod run;
mod script;

use clap::Parser;

fn main() {
    let args = cli::Args::parse();

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| paths::default_log_path("sizer.log"));

    if let Err(e) = logging::init_logging(&log_path, args.verbose) {
        // logging should never block normal usage
        eprintln!("sizer: failed to init logging: {e}");
    }

    if let Err(e) = run::run(args) {
        eventline::error!("fatal error: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
