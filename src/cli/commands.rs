//! CLI command definitions using clap
//!
//! Defines all CLI subcommands and their arguments.

use clap::{Parser, Subcommand, ValueEnum};

/// Target documentation generator for Phing build files.
///
/// Classifies the targets of a build file and everything it imports, and
/// renders them into `{build_dir}/docs/target-list.md`.
#[derive(Parser, Debug)]
#[command(name = "targetdoc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (overrides default XDG paths)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the target documentation
    Generate(GenerateArgs),

    /// List classified targets
    List(ListArgs),

    /// Show the build files reachable from the root build file
    Builds(BuildsArgs),

    /// Start MCP server over stdio
    Mcp,
}

/// Arguments for the `generate` subcommand
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Root build file (defaults to docs.build_file from config)
    #[arg(short, long)]
    pub build_file: Option<String>,

    /// Build directory receiving docs/target-list.md (defaults to docs.build_dir)
    #[arg(short = 'd', long)]
    pub build_dir: Option<String>,

    /// Print the document instead of writing it
    #[arg(long)]
    pub stdout: bool,
}

/// Arguments for the `list` subcommand
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Root build file (defaults to docs.build_file from config)
    #[arg(short, long)]
    pub build_file: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the `builds` subcommand
#[derive(Parser, Debug)]
pub struct BuildsArgs {
    /// Root build file (defaults to docs.build_file from config)
    #[arg(short, long)]
    pub build_file: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    Table,
    /// JSON output
    Json,
    /// Plain text (one entry per line)
    Plain,
}
