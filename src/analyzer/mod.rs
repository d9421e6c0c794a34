// src/analyzer/mod.rs
// =============================================================================
// This module contains all page content analysis logic.
//
// Submodules:
// - html: Extracts the title, meta description, and keyword presence
//
// This file (mod.rs) is the module root - it re-exports the public API
// that other parts of our application use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod html;

// Re-export public items from the submodule
// This lets users write `analyzer::PageFacts` instead of
// `analyzer::html::PageFacts`
pub use html::{
    extract_keyword_presence, extract_title_and_description, KeywordPresence, PageFacts,
    META_DESCRIPTION_NOT_FOUND, TITLE_NOT_FOUND,
};
