//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to adjust the budget and character sets");
        println!("2. Validate your configuration:");
        println!("   kowake validate -c {}", self.output.display());
        println!("3. Use it for chunking:");
        println!("   kowake chunk -i input.txt -c {}", self.output.display());

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        r#"# kowake configuration

[chunking]
# Maximum chunk length in characters. Speech APIs usually cap the text
# per request; chunks never exceed this budget.
max_chars = 200

# Sentence terminator characters (one character per entry)
terminators = [".", "!", "?", "。", "！", "？"]

[cleaning]
# Normalize text before chunking: unwrap Markdown spans, drop decorative
# symbols, collapse whitespace
enabled = true

# Override the built-in character sets (uncomment to customize):
# remove = ["♪", "★", "☆"]
# to_space = ["・", "…"]

[output]
# Default output format: text, json, or markdown
default_format = "text"

# Include per-source metadata in JSON output
include_metadata = false

# Pretty print JSON output
pretty_json = true
"#
        .to_string()
    }
}
