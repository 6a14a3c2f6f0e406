//! Aggregate selected files into one knowledge-base document

use crate::core::error::Result;
use crate::scan::{ScanResult, ScannedFile};
use indicatif::ProgressBar;
use serde::Serialize;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Summary of one export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    /// Documents written
    pub documents: usize,
    /// Selected files left out (unreadable or not UTF-8)
    pub skipped: Vec<String>,
    pub bytes_written: u64,
    pub output: PathBuf,
}

/// Writes selected files as `<document>` blocks into a single text file
#[derive(Default)]
pub struct KnowledgeBaseExporter {
    progress: Option<ProgressBar>,
}

impl KnowledgeBaseExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tick `progress` once per selected file
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Export every selected file of `scan` to `output`
    pub fn export(&self, scan: &ScanResult, output: &Path) -> Result<ExportReport> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(fs::File::create(output)?);
        let mut report = ExportReport {
            documents: 0,
            skipped: Vec::new(),
            bytes_written: 0,
            output: output.to_path_buf(),
        };

        if let Some(pb) = &self.progress {
            pb.set_length(scan.selected.len() as u64);
        }

        for file in &scan.selected {
            if let Some(pb) = &self.progress {
                pb.set_message(file.relative.clone());
                pb.inc(1);
            }

            // The output file may itself sit inside the scanned tree
            if same_file(&file.path, output) {
                continue;
            }

            let content = match fs::read(&file.path) {
                Ok(bytes) => match String::from_utf8(bytes) {
                    Ok(text) => text,
                    Err(_) => {
                        warn!(path = %file.relative, "skipping file that is not valid UTF-8");
                        report.skipped.push(file.relative.clone());
                        continue;
                    },
                },
                Err(e) => {
                    warn!(path = %file.relative, error = %e, "skipping unreadable file");
                    report.skipped.push(file.relative.clone());
                    continue;
                },
            };

            let block = render_document(file, &content);
            if report.documents > 0 {
                writer.write_all(b"\n")?;
                report.bytes_written += 1;
            }
            writer.write_all(block.as_bytes())?;
            report.bytes_written += block.len() as u64;
            report.documents += 1;
        }

        writer.flush()?;

        if let Some(pb) = &self.progress {
            pb.finish_and_clear();
        }

        info!(
            output = %output.display(),
            documents = report.documents,
            skipped = report.skipped.len(),
            bytes = report.bytes_written,
            "knowledge base written"
        );
        Ok(report)
    }
}

/// One `<document>` block
pub fn render_document(file: &ScannedFile, content: &str) -> String {
    let mut block = String::with_capacity(content.len() + file.relative.len() + 96);
    block.push_str("<document>\n");
    block.push_str(&format!(
        "<source type=\"file\" path=\"{}\"/>\n",
        escape_attribute(&file.relative)
    ));
    block.push_str("<content>\n");
    block.push_str(content);
    if !content.ends_with('\n') {
        block.push('\n');
    }
    block.push_str("</content>\n");
    block.push_str("</document>\n");
    block
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
