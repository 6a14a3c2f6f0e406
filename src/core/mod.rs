//! Core types for pathpick
//!
//! Error handling and the project path layout shared by every layer.

pub mod error;
pub mod paths;

// Re-export commonly used items
pub use error::{PathPickError, PatternError, Result};
pub use paths::{to_slash, ProjectPaths, CONFIG_FILE_NAME};
