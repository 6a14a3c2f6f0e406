//! pathpick CLI
//!
//! Command-line front end for include/exclude path selection.

use anyhow::Result;
use clap::Parser;
use pathpick::cli::{commands, Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG overrides the flag-derived level
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Execute the command
    match cli.command {
        Commands::Check { paths } => commands::check::execute(paths, &cli.selection, cli.json),
        Commands::Scan {
            dir,
            show_rejected,
            follow_links,
            max_depth,
        } => commands::scan::execute(
            dir,
            show_rejected,
            follow_links,
            max_depth,
            &cli.selection,
            cli.json,
            cli.quiet,
        ),
        Commands::Export {
            dir,
            output,
            no_progress,
        } => commands::export::execute(
            dir,
            output,
            no_progress,
            &cli.selection,
            cli.json,
            cli.quiet,
        ),
        Commands::Init { dir, force } => commands::init::execute(dir, force, cli.quiet),
        Commands::Completion { shell } => commands::completion::execute(shell),
    }
}
