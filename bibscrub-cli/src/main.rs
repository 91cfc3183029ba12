//! bibscrub command-line entry point

use bibscrub_cli::commands::{CleanArgs, ProcessArgs};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bibscrub",
    version,
    about = "Normalize bibliographic record text and prune extracted feature counts"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a corpus pass: sanitize, filter, count, prune, export
    Process(ProcessArgs),
    /// Sanitize record text and print it
    Clean(CleanArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Process(args) => args.execute(),
        Commands::Clean(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
