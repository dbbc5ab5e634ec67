use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::language::Lang;
use crate::output::OutputFormat;
use crate::rules::{Remediation, Severity};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "slop-guard")]
#[command(author, version, about = "Detect code slop: debug leftovers, placeholders, secrets, and bloat")]
#[command(long_about = "Scans source trees for quality defects and classifies each finding\n\
    by severity and certainty.\n\n\
    Exit codes:\n  \
    0 - No findings at or above the failure severity\n  \
    1 - Findings at or above the failure severity\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan files for slop findings
    Scan(ScanArgs),

    /// List the built-in rule registry
    Rules(RulesArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Paths to scan (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File extensions to scan (comma-separated, e.g., rs,go,py)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns for file discovery (glob syntax, repeatable)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Only scan these language families (repeatable)
    #[arg(long = "lang")]
    pub languages: Vec<Lang>,

    /// Drop findings below this severity
    #[arg(long)]
    pub severity: Option<Severity>,

    /// Exit with code 1 when findings reach this severity (overrides config)
    #[arg(long)]
    pub fail_on: Option<Severity>,

    /// Also run the project-level analyzers against the scan root
    #[arg(long)]
    pub project: bool,

    /// Ignore .gitignore during directory discovery
    #[arg(long)]
    pub no_gitignore: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// Only rules for this language family (universal rules included)
    #[arg(long = "lang")]
    pub language: Option<Lang>,

    /// Only rules with this severity
    #[arg(long)]
    pub severity: Option<Severity>,

    /// Only rules with this suggested remediation
    #[arg(long)]
    pub remediation: Option<Remediation>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".slop-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
