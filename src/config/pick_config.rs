//! Selection profile stored as `pathpick.toml`

use crate::core::error::{PathPickError, Result};
use crate::core::paths::CONFIG_FILE_NAME;
use crate::matcher::PatternMatcher;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Include/exclude lists plus export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickConfig {
    /// Patterns a path must match (empty: everything)
    pub include: Vec<String>,
    /// Patterns that reject a path outright
    pub exclude: Vec<String>,
    /// Compare case-sensitively (default true)
    pub case_sensitive: bool,
    /// Knowledge-base export settings
    pub export: ExportConfig,
}

/// `[export]` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Output file, relative to the project root
    pub output: Option<PathBuf>,
    /// Follow symbolic links while walking
    pub follow_links: bool,
    /// Maximum walk depth
    pub max_depth: Option<usize>,
}

impl Default for PickConfig {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            case_sensitive: true,
            export: ExportConfig::default(),
        }
    }
}

impl PickConfig {
    /// Load a profile from disk
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PathPickError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content).map_err(|e| {
            PathPickError::configuration(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        debug!(
            path = %path.display(),
            include = config.include.len(),
            exclude = config.exclude.len(),
            "loaded selection profile"
        );
        Ok(config)
    }

    /// Parse a profile from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Write the profile, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Search `start` and its ancestors for `pathpick.toml`
    pub fn find(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Append command-line patterns to the configured lists
    pub fn extend(&mut self, include: &[String], exclude: &[String]) {
        self.include.extend(include.iter().cloned());
        self.exclude.extend(exclude.iter().cloned());
    }

    /// Compile the configured lists
    pub fn matcher(&self) -> Result<PatternMatcher> {
        let matcher = PatternMatcher::builder()
            .includes(self.include.iter().cloned())
            .excludes(self.exclude.iter().cloned())
            .case_sensitive(self.case_sensitive)
            .build()?;
        Ok(matcher)
    }

    /// Profile written by `pathpick init`
    pub fn starter() -> Self {
        Self {
            include: vec![
                "README*".to_string(),
                "Cargo.toml".to_string(),
                "src/**/*.rs".to_string(),
                "tests/**/*.rs".to_string(),
                "docs/**/*.md".to_string(),
            ],
            exclude: vec![
                "target/**".to_string(),
                "**/.git/**".to_string(),
                "tmp/**".to_string(),
            ],
            case_sensitive: true,
            export: ExportConfig::default(),
        }
    }
}
