//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `analyze`: scan for components and report which ones are used
//! - `files`: list the source files a scan would read
//! - `report`: write a Markdown usage report
//! - `graph`: export component graph data as JSON
//! - `clean`: delete files whose components are all unused
//! - `init`: create a `.cuarc.json` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        self.common().is_some_and(|common| common.verbose)
    }

    pub fn common(&self) -> Option<&CommonArgs> {
        match &self.command {
            Some(Command::Analyze(cmd)) => Some(&cmd.common),
            Some(Command::Files(cmd)) => Some(&cmd.common),
            Some(Command::Report(cmd)) => Some(&cmd.common),
            Some(Command::Graph(cmd)) => Some(&cmd.common),
            Some(Command::Clean(cmd)) => Some(&cmd.common),
            Some(Command::Init) | None => None,
        }
    }
}

/// Common arguments shared by all scanning commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Base directory for reported paths (default: nearest package.json)
    #[arg(long)]
    pub project_root: Option<PathBuf>,

    /// File-based routing directory, relative to the project root (overrides config file)
    #[arg(long)]
    pub router_root: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct AnalyzeCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,

    /// Print per-phase timings
    #[arg(long)]
    pub timings: bool,

    /// Exit with status 1 when unused components are found
    #[arg(long)]
    pub fail_on_unused: bool,
}

#[derive(Debug, Args)]
pub struct FilesCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print the file list as a JSON array
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ReportCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output file ("-" for stdout)
    #[arg(short, long, default_value = "component-report.md")]
    pub output: PathBuf,
}

#[derive(Debug, Args)]
pub struct GraphCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually delete files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find components and report where each one is used
    Analyze(AnalyzeCommand),
    /// List the source files that would be scanned
    Files(FilesCommand),
    /// Write a Markdown component usage report
    Report(ReportCommand),
    /// Export component graph data (nodes and edges) as JSON
    Graph(GraphCommand),
    /// Delete files whose components are all unused
    Clean(CleanCommand),
    /// Initialize a new .cuarc.json configuration file
    Init,
}
