//! Error types for pathpick

use std::path::PathBuf;
use thiserror::Error;

/// Raised when a glob pattern cannot be compiled
///
/// Compilation is eager, so these only ever surface while a matcher is being
/// constructed. Querying a matcher never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Character classes and brace expansion are not part of the grammar
    #[error("unsupported character '{ch}' at position {position} in pattern '{pattern}' (character classes and brace expansion are not supported)")]
    UnsupportedSyntax {
        pattern: String,
        ch: char,
        position: usize,
    },

    /// `**` shares a segment with other characters, e.g. `src/a**`
    #[error("recursive wildcard '**' at position {position} in pattern '{pattern}' must be a whole path segment")]
    InvalidRecursiveWildcard { pattern: String, position: usize },
}

impl PatternError {
    /// The pattern source that failed to compile
    pub fn pattern(&self) -> &str {
        match self {
            Self::UnsupportedSyntax { pattern, .. } => pattern,
            Self::InvalidRecursiveWildcard { pattern, .. } => pattern,
        }
    }
}

/// Main error type for pathpick operations
#[derive(Error, Debug)]
pub enum PathPickError {
    /// A configured pattern is malformed
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] PatternError),

    /// Configuration errors
    #[error("Configuration error: {reason}")]
    ConfigurationError { reason: String },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration file already exists: {path}")]
    ConfigAlreadyExists { path: PathBuf },

    /// Directory given to the scanner is missing or not a directory
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory walking errors
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// TOML errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl PathPickError {
    /// Create a new configuration error
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::ConfigurationError {
            reason: reason.into(),
        }
    }

    /// Create a new not-a-directory error
    pub fn not_a_directory(path: PathBuf) -> Self {
        Self::NotADirectory { path }
    }
}

/// Result type alias for pathpick operations
pub type Result<T> = std::result::Result<T, PathPickError>;
