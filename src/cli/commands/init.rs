//! Init command implementation

use crate::cli::commands::project_dir;
use crate::config::PickConfig;
use crate::core::error::PathPickError;
use crate::core::paths::ProjectPaths;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Execute the init command
pub fn execute(dir: Option<PathBuf>, force: bool, quiet: bool) -> Result<()> {
    let dir = project_dir(dir)?;
    let config_path = ProjectPaths::new(&dir).config_file();

    if config_path.exists() && !force {
        return Err(PathPickError::ConfigAlreadyExists { path: config_path }.into());
    }

    PickConfig::starter().save(&config_path)?;

    if !quiet {
        println!("{}", "✓ Selection profile created".green());
        println!("  • File: {}", config_path.display().to_string().cyan());
        println!("  • Edit the include/exclude lists, then run {}", "pathpick scan".cyan());
    }

    Ok(())
}
