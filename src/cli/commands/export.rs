//! Export command implementation

use crate::cli::commands::{project_dir, resolve_matcher};
use crate::cli::SelectionArgs;
use crate::core::paths::ProjectPaths;
use crate::export::KnowledgeBaseExporter;
use crate::scan::FilteredFileScanner;
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// Execute the export command
pub fn execute(
    dir: Option<PathBuf>,
    output: Option<PathBuf>,
    no_progress: bool,
    selection: &SelectionArgs,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let dir = project_dir(dir)?;
    let paths = ProjectPaths::new(&dir);
    let (config, matcher) = resolve_matcher(selection, &dir)?;

    // --output is taken as given; the profile's output is relative to the root
    let output = match (output, &config.export.output) {
        (Some(output), _) => output,
        (None, Some(configured)) => dir.join(configured),
        (None, None) => paths.default_output(),
    };

    let scan = FilteredFileScanner::new(matcher)
        .follow_links(config.export.follow_links)
        .max_depth(config.export.max_depth)
        .scan(&dir)?;

    let mut exporter = KnowledgeBaseExporter::new();
    if !no_progress && !quiet && !json {
        let progress = ProgressBar::new(scan.selected.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        exporter = exporter.with_progress(progress);
    }

    let report = exporter.export(&scan, &output)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !quiet {
        println!("{}", "✓ Knowledge base written".green());
        println!("  • Output: {}", report.output.display().to_string().cyan());
        println!("  • Documents: {}", report.documents);
        println!("  • Size: {} bytes", report.bytes_written);
        if !report.skipped.is_empty() {
            println!(
                "  • {} {} skipped (unreadable or not UTF-8)",
                report.skipped.len().to_string().yellow(),
                if report.skipped.len() == 1 { "file" } else { "files" }
            );
        }
    }

    Ok(())
}
