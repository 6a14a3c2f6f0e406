//! Configuration management for pathpick
//!
//! Selection profiles live in `pathpick.toml` at the project root.

pub mod pick_config;

// Re-export commonly used items
pub use pick_config::{ExportConfig, PickConfig};
