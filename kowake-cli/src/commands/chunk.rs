//! Chunk command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use kowake_core::{Input, Output, TextChunker};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the chunk command
#[derive(Debug, Args)]
pub struct ChunkArgs {
    /// Input files or patterns (supports glob); use "-" for stdin
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Maximum chunk length in characters
    #[arg(short, long, value_name = "N")]
    pub max_chars: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip text cleaning before chunking
    #[arg(long)]
    pub raw: bool,

    /// Worker threads for multi-file input (0 = auto)
    #[arg(short, long, value_name = "N", default_value_t = 0)]
    pub jobs: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one chunk per line
    Text,
    /// JSON array of chunks with offsets
    Json,
    /// Markdown formatted output
    Markdown,
}

impl OutputFormat {
    /// Resolve a format from its config-file name
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" => Ok(OutputFormat::Markdown),
            other => Err(CliError::UnknownFormat(other.to_string()).into()),
        }
    }
}

impl ChunkArgs {
    /// Execute the chunk command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting chunking");
        log::debug!("Arguments: {:?}", self);

        let cli_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let chunk_config = cli_config.chunk_config(self.max_chars, self.raw)?;
        log::debug!(
            "Effective budget: {} chars, {} terminator(s), cleaning {}",
            chunk_config.max_chars(),
            chunk_config.terminators().len(),
            if chunk_config.clean().is_some() {
                "on"
            } else {
                "off"
            },
        );
        let chunker = TextChunker::with_config(chunk_config);

        let results = if self.wants_stdin()? {
            let text = FileReader::read_stdin()?;
            let output = chunker.chunk(Input::from_text(text))?;
            vec![("<stdin>".to_string(), output)]
        } else {
            self.process_files(&chunker)?
        };

        self.write_results(&results, &cli_config)
    }

    /// Whether the input list selects stdin; rejects mixing "-" with files
    fn wants_stdin(&self) -> Result<bool> {
        let has_stdin = self.input.iter().any(|input| input == "-");
        if has_stdin && self.input.len() > 1 {
            anyhow::bail!("stdin input \"-\" cannot be combined with file patterns");
        }
        Ok(has_stdin)
    }

    /// Resolve patterns and chunk every file, in parallel for multi-file runs
    fn process_files(&self, chunker: &TextChunker) -> Result<Vec<(String, Output)>> {
        let files = resolve_patterns(&self.input)?;

        let threads = if self.jobs > 0 {
            self.jobs
        } else {
            num_cpus::get()
        };
        log::info!(
            "Processing {} file(s) on up to {} thread(s)",
            files.len(),
            threads
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build worker thread pool")?;

        let mut progress = ProgressReporter::new(self.quiet || files.len() < 2);
        progress.init_files(files.len() as u64);

        let results: Vec<Result<(String, Output)>> = pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    let text = FileReader::read_text(path)?;
                    let output = chunker.chunk(Input::from_text(text))?;
                    progress.file_completed(&path.display().to_string());
                    Ok((path.display().to_string(), output))
                })
                .collect()
        });

        progress.finish();
        results.into_iter().collect()
    }

    /// Write all results through the selected formatter
    fn write_results(&self, results: &[(String, Output)], config: &CliConfig) -> Result<()> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&config.output.default_format)?,
        };

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(fs::File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?),
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(
                writer,
                config.output.pretty_json,
                config.output.include_metadata,
            )),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        for (name, output) in results {
            formatter.begin_source(name, &output.metadata)?;
            for chunk in &output.chunks {
                formatter.format_chunk(chunk)?;
            }
        }
        formatter.finish()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
