//! Directory scanner that classifies every file with a [`PatternMatcher`]

use crate::core::error::{PathPickError, Result};
use crate::core::paths::ProjectPaths;
use crate::matcher::{PatternMatcher, Selection};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Phase of a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanPhase {
    /// Walking the directory tree
    Discovery,
    /// Running each file through the matcher
    Filtering,
    /// Scan completed
    Complete,
}

/// Progress snapshot handed to the progress callback
#[derive(Debug, Clone)]
pub struct ScanProgress {
    pub phase: ScanPhase,
    /// Files discovered so far
    pub files_discovered: usize,
    /// Files classified so far
    pub files_processed: usize,
    /// Files selected so far
    pub files_selected: usize,
    /// Relative path of the file being looked at
    pub current_file: Option<String>,
    pub elapsed: Duration,
}

/// A file found during the scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScannedFile {
    /// Absolute (or root-joined) path on disk
    pub path: PathBuf,
    /// Root-relative, `/`-separated path given to the matcher
    pub relative: String,
}

/// A file the matcher turned down, with the reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedFile {
    #[serde(flatten)]
    pub file: ScannedFile,
    pub reason: Selection,
}

/// Scan counters
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanStats {
    pub total_discovered: usize,
    pub total_selected: usize,
    pub total_rejected: usize,
    /// Walk entries that could not be read
    pub walk_errors: usize,
}

/// Outcome of [`FilteredFileScanner::scan`]; both lists sorted by relative path
#[derive(Debug)]
pub struct ScanResult {
    pub root: PathBuf,
    pub selected: Vec<ScannedFile>,
    pub rejected: Vec<RejectedFile>,
    pub total_time: Duration,
    pub stats: ScanStats,
}

/// Walks a root directory and splits its files into selected and rejected
pub struct FilteredFileScanner {
    matcher: PatternMatcher,
    progress_callback: Option<Box<dyn Fn(&ScanProgress) + Send + Sync>>,
    follow_links: bool,
    max_depth: Option<usize>,
}

impl FilteredFileScanner {
    pub fn new(matcher: PatternMatcher) -> Self {
        Self {
            matcher,
            progress_callback: None,
            follow_links: false,
            max_depth: None,
        }
    }

    /// Set progress callback for real-time updates
    pub fn with_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(&ScanProgress) + Send + Sync + 'static,
    {
        self.progress_callback = Some(Box::new(callback));
        self
    }

    /// Set whether to follow symbolic links
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Set maximum depth for directory traversal
    pub fn max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn matcher(&self) -> &PatternMatcher {
        &self.matcher
    }

    /// Scan `root`, classifying every regular file by its root-relative path
    pub fn scan(&self, root: &Path) -> Result<ScanResult> {
        if !root.is_dir() {
            return Err(PathPickError::not_a_directory(root.to_path_buf()));
        }

        let start_time = Instant::now();
        let paths = ProjectPaths::new(root);
        let mut stats = ScanStats::default();
        let mut progress = ScanProgress {
            phase: ScanPhase::Discovery,
            files_discovered: 0,
            files_processed: 0,
            files_selected: 0,
            current_file: None,
            elapsed: Duration::default(),
        };

        // Phase 1: Discovery
        self.report_progress(&progress);
        let discovered = self.discover_files(&paths, &mut progress, &mut stats);

        // Phase 2: Filtering
        progress.phase = ScanPhase::Filtering;
        self.report_progress(&progress);

        let mut selected = Vec::new();
        let mut rejected = Vec::new();

        for (index, file) in discovered.into_iter().enumerate() {
            progress.files_processed = index + 1;

            match self.matcher.explain(&file.relative) {
                Selection::Selected { .. } => {
                    debug!(path = %file.relative, "selected");
                    progress.files_selected += 1;
                    selected.push(file);
                },
                reason => {
                    debug!(path = %file.relative, %reason, "rejected");
                    rejected.push(RejectedFile { file, reason });
                },
            }

            if index % 50 == 0 {
                progress.elapsed = start_time.elapsed();
                self.report_progress(&progress);
            }
        }

        selected.sort_by(|a, b| a.relative.cmp(&b.relative));
        rejected.sort_by(|a, b| a.file.relative.cmp(&b.file.relative));

        stats.total_discovered = progress.files_discovered;
        stats.total_selected = selected.len();
        stats.total_rejected = rejected.len();

        // Phase 3: Complete
        progress.phase = ScanPhase::Complete;
        progress.current_file = None;
        progress.elapsed = start_time.elapsed();
        self.report_progress(&progress);

        info!(
            root = %root.display(),
            discovered = stats.total_discovered,
            selected = stats.total_selected,
            rejected = stats.total_rejected,
            "scan complete"
        );

        Ok(ScanResult {
            root: root.to_path_buf(),
            selected,
            rejected,
            total_time: progress.elapsed,
            stats,
        })
    }

    /// Every regular file under the root. Unreadable entries are logged and
    /// skipped.
    fn discover_files(
        &self,
        paths: &ProjectPaths,
        progress: &mut ScanProgress,
        stats: &mut ScanStats,
    ) -> Vec<ScannedFile> {
        let mut files = Vec::new();
        let mut walker = WalkDir::new(paths.root()).follow_links(self.follow_links);

        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        for entry in walker {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() {
                        let relative = paths.relative(entry.path());
                        progress.files_discovered += 1;
                        progress.current_file = Some(relative.clone());
                        files.push(ScannedFile {
                            path: entry.into_path(),
                            relative,
                        });

                        // Report progress every 100 files during discovery
                        if progress.files_discovered % 100 == 0 {
                            self.report_progress(progress);
                        }
                    }
                },
                Err(e) => {
                    warn!("Error accessing file: {}", e);
                    stats.walk_errors += 1;
                },
            }
        }

        files
    }

    fn report_progress(&self, progress: &ScanProgress) {
        if let Some(callback) = &self.progress_callback {
            callback(progress);
        }
    }
}
