// src/report/mod.rs
// =============================================================================
// This module assembles and persists the SEO report document.
//
// Submodules:
// - document: Report struct, Markdown rendering, filename derivation,
//   and writing the file to disk
// =============================================================================

mod document;

// Re-export the report API
pub use document::{build_report, persist, render_markdown, report_filename, SeoReport};
