use clap::Parser;

mod cli;

use crate::cli::Cli;

fn main() {
    // Parse CLI, then load config and logging, then dispatch.
    let cli = Cli::parse();
    if let Err(err) = cli.run() {
        eprintln!("funurl error: {:#}", err);
        std::process::exit(1);
    }
}
