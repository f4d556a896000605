//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "backfill")]
#[command(
    about = "Generate a git script whose commit history paints a contribution pattern",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $BACKFILL_CONFIG or ./backfill.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the commit script (prompts for missing values)
    Generate(GenerateArgs),

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Owner handle (whose calendar sets the scale, and the remote owner)
    #[arg(short, long)]
    pub user: Option<String>,

    /// Repository name created by the script
    #[arg(short, long)]
    pub repo: Option<String>,

    /// First day of the range (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,

    /// Day after the last painted day (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<String>,

    /// Commits per intensity level, instead of deriving it from the calendar
    #[arg(long, value_name = "COMMITS")]
    pub lightest: Option<String>,

    /// Script dialect (bash, sh)
    #[arg(short, long)]
    pub dialect: Option<String>,

    /// Seed for a reproducible random pattern
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fixed pattern file: 7 lines of digits 0-4, one digit per week
    #[arg(long, value_name = "FILE")]
    pub pattern: Option<PathBuf>,

    /// Read the contribution calendar from a file instead of fetching it
    #[arg(long, value_name = "FILE")]
    pub calendar: Option<PathBuf>,

    /// Where to write the script
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the script to stdout instead of writing a file
    #[arg(long)]
    pub print: bool,
}
