//! Knowledge-base export
//!
//! Concatenates the contents of every selected file into one text artifact,
//! one `<document>` block per file, in relative-path order.

pub mod knowledge_base;

// Re-export commonly used items
pub use knowledge_base::{render_document, ExportReport, KnowledgeBaseExporter};
