//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod chunk;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text into speech-sized chunks
    Chunk(chunk::ChunkArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),

    /// Generate a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List the default terminator characters
    Terminators,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Chunk(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    /// Execute the selected list subcommand
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Formats => {
                println!("text      One chunk per line");
                println!("json      JSON array of chunks with offsets");
                println!("markdown  Numbered list with a trailing summary");
            }
            ListCommands::Terminators => {
                for ch in kowake_core::DEFAULT_TERMINATORS {
                    println!("{}  U+{:04X}", ch, ch as u32);
                }
            }
        }
        Ok(())
    }
}
