//! Command-line front end for kowake text chunking

use anyhow::Result;
use clap::Parser;
use kowake_cli::commands::Commands;

/// Split text into speech-sized chunks at sentence boundaries
#[derive(Debug, Parser)]
#[command(name = "kowake", version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
