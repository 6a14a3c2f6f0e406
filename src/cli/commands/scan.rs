//! Scan command implementation

use crate::cli::commands::{project_dir, resolve_matcher};
use crate::cli::SelectionArgs;
use crate::scan::FilteredFileScanner;
use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use std::path::PathBuf;

/// Execute the scan command
pub fn execute(
    dir: Option<PathBuf>,
    show_rejected: bool,
    follow_links: bool,
    max_depth: Option<usize>,
    selection: &SelectionArgs,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let dir = project_dir(dir)?;
    let (config, matcher) = resolve_matcher(selection, &dir)?;

    let scanner = FilteredFileScanner::new(matcher)
        .follow_links(follow_links || config.export.follow_links)
        .max_depth(max_depth.or(config.export.max_depth));
    let result = scanner.scan(&dir)?;

    if json {
        let mut value = json!({
            "root": result.root.display().to_string(),
            "selected": result.selected.iter().map(|f| &f.relative).collect::<Vec<_>>(),
            "stats": result.stats,
        });
        if show_rejected {
            value["rejected"] = serde_json::to_value(&result.rejected)?;
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    for file in &result.selected {
        println!("{}", file.relative);
    }

    if show_rejected {
        for rejected in &result.rejected {
            println!(
                "{} {} {}",
                "-".red(),
                rejected.file.relative.dimmed(),
                format!("({})", rejected.reason).dimmed()
            );
        }
    }

    if !quiet {
        eprintln!(
            "\n{} {} selected, {} rejected of {} files in {:.2}s",
            "•".cyan(),
            result.stats.total_selected.to_string().green(),
            result.stats.total_rejected,
            result.stats.total_discovered,
            result.total_time.as_secs_f64()
        );
        if result.stats.walk_errors > 0 {
            eprintln!(
                "{} {} entries could not be read",
                "!".yellow(),
                result.stats.walk_errors
            );
        }
    }

    Ok(())
}
