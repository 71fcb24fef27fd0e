//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use nanordr_batch::EvaluationMode;
use std::path::PathBuf;

/// nanordr - Ripple-Down Rules inference for nanoparticle formulations.
#[derive(Debug, Parser)]
#[command(name = "nanordr")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "NANORDR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (rule names only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate a JSONL file of input cases into a prediction file
    Run(RunArgs),

    /// Evaluate a single input case
    Eval(EvalArgs),

    /// Show the standard rule tree
    Tree,

    /// Summarise a prediction file
    Stats(StatsArgs),
}

/// Arguments for the run command.
#[derive(Debug, Parser)]
pub struct RunArgs {
    /// JSONL file of input cases
    pub input: PathBuf,

    /// Prediction file to write
    pub output: PathBuf,

    /// Evaluate at most this many cases
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Evaluation mode
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Drop malformed lines instead of recording them as failures
    #[arg(long)]
    pub skip_invalid: bool,
}

/// Arguments for the eval command.
#[derive(Debug, Parser)]
pub struct EvalArgs {
    /// JSON file holding one input case ("-" reads stdin)
    #[arg(default_value = "-")]
    pub input: String,

    /// Report every conclusion instead of the single most specific one
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for the stats command.
#[derive(Debug, Parser)]
pub struct StatsArgs {
    /// Prediction file to summarise
    pub file: PathBuf,

    /// Number of rules to list
    #[arg(short, long, default_value = "10")]
    pub top: usize,
}

/// Evaluation mode argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ModeArg {
    /// One conclusion per case
    Single,
    /// Every conclusion along the matching paths
    All,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<ModeArg> for EvaluationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Single => EvaluationMode::Single,
            ModeArg::All => EvaluationMode::All,
        }
    }
}
