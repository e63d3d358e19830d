//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;

/// Ownerscope - find company ownership and leadership from a website URL.
#[derive(Debug, Parser)]
#[command(name = "ownerscope")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Company website URL to analyze
    #[arg(value_name = "URL", conflicts_with = "file", required_unless_present = "file")]
    pub url: Option<String>,

    /// Text file containing URLs (one per line), processed sequentially
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Perplexity API key (falls back to the environment variable)
    #[arg(long, env = "PERPLEXITY_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Root directory for persisted reports
    #[arg(long, value_name = "DIR")]
    pub results_root: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Skip the owners-only follow-up query
    #[arg(long)]
    pub no_second_pass: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Field table (default)
    Table,
    /// Full record as JSON
    Json,
    /// Minimal output (saved path only)
    Quiet,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => Self::Table,
            CliFormat::Json => Self::Json,
            CliFormat::Quiet => Self::Quiet,
        }
    }
}
