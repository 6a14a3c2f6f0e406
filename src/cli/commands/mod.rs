//! CLI command implementations

pub mod check;
pub mod completion;
pub mod export;
pub mod init;
pub mod scan;

// Common utilities for commands
use crate::cli::SelectionArgs;
use crate::config::PickConfig;
use crate::matcher::PatternMatcher;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve the effective profile for `project_dir`.
///
/// An explicit `--config` must exist. Otherwise the nearest `pathpick.toml`
/// at or above `project_dir` is used, falling back to an empty profile.
/// Command-line patterns are appended to the profile's lists.
pub fn resolve_config(selection: &SelectionArgs, project_dir: &Path) -> Result<PickConfig> {
    let mut config = match &selection.config {
        Some(path) => PickConfig::load(path)
            .with_context(|| format!("Failed to load profile {}", path.display()))?,
        None => match PickConfig::find(project_dir) {
            Some(path) => {
                debug!(path = %path.display(), "using discovered profile");
                PickConfig::load(&path)?
            },
            None => PickConfig::default(),
        },
    };

    config.extend(&selection.include, &selection.exclude);
    if selection.ignore_case {
        config.case_sensitive = false;
    }
    Ok(config)
}

/// Resolve the profile and compile its matcher
pub fn resolve_matcher(
    selection: &SelectionArgs,
    project_dir: &Path,
) -> Result<(PickConfig, PatternMatcher)> {
    let config = resolve_config(selection, project_dir)?;
    let matcher = config.matcher().context("Invalid selection patterns")?;
    Ok((config, matcher))
}

/// `dir` or the current directory
pub fn project_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::paths::CONFIG_FILE_NAME;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_config_merges_cli_patterns() -> Result<()> {
        let temp_dir = TempDir::new()?;
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "include = [\"**/*.py\"]\nexclude = [\"build/**\"]\n",
        )?;

        let selection = SelectionArgs {
            config: None,
            include: vec!["**/*.md".to_string()],
            exclude: vec!["**/test_*.py".to_string()],
            ignore_case: true,
        };

        let (config, matcher) = resolve_matcher(&selection, temp_dir.path())?;
        assert_eq!(config.include, vec!["**/*.py", "**/*.md"]);
        assert_eq!(config.exclude, vec!["build/**", "**/test_*.py"]);
        assert!(!matcher.is_case_sensitive());
        assert!(matcher.is_selected("docs/INDEX.MD"));
        assert!(!matcher.is_selected("build/a.py"));
        Ok(())
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let temp_dir = TempDir::new().unwrap();
        let selection = SelectionArgs {
            config: Some(temp_dir.path().join("nope.toml")),
            ..SelectionArgs::default()
        };
        assert!(resolve_config(&selection, temp_dir.path()).is_err());
    }
}
