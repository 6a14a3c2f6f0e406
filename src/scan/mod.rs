//! Directory scanning with include/exclude filtering
//!
//! Walks a project tree and runs each file's root-relative path through a
//! [`PatternMatcher`](crate::matcher::PatternMatcher). Directories are always
//! descended; only files are classified.

pub mod scanner;

// Re-export commonly used items
pub use scanner::{
    FilteredFileScanner, RejectedFile, ScanPhase, ScanProgress, ScanResult, ScanStats, ScannedFile,
};
