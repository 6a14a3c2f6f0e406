//! Command-line interface for pathpick

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

pub mod commands;

/// pathpick - include/exclude glob path selection
#[derive(Parser)]
#[command(
    name = "pathpick",
    version,
    about = "Select project files with include/exclude glob patterns",
    long_about = "pathpick decides which relative paths are selected by ordered include and exclude glob lists. Exclusion always wins; an empty include list selects everything that is not excluded."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub selection: SelectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options that shape the matcher, shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Selection profile (default: nearest pathpick.toml)
    #[arg(long, global = true, env = "PATHPICK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Extra include pattern (repeatable)
    #[arg(short = 'i', long = "include", global = true, value_name = "GLOB")]
    pub include: Vec<String>,

    /// Extra exclude pattern (repeatable)
    #[arg(short = 'e', long = "exclude", global = true, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Compare paths case-insensitively
    #[arg(long, global = true)]
    pub ignore_case: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report whether each path is selected
    Check {
        /// Relative paths to classify
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// List the files under a directory that are selected
    Scan {
        /// Directory to scan (default: current directory)
        dir: Option<PathBuf>,

        /// Also list rejected files with the reason
        #[arg(long)]
        show_rejected: bool,

        /// Follow symbolic links
        #[arg(long)]
        follow_links: bool,

        /// Maximum directory depth
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Write the selected files into one knowledge-base document
    Export {
        /// Directory to export (default: current directory)
        dir: Option<PathBuf>,

        /// Output file (default: <dir>/tmp/all_in_one_knowledge_base.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Write a starter pathpick.toml
    Init {
        /// Project directory (default: current directory)
        dir: Option<PathBuf>,

        /// Overwrite an existing profile
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: Shell,
    },
}
