//! notesweep binary entry point

use clap::Parser;
use notesweep_cli::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
