// src/mobile/mod.rs
// =============================================================================
// This module handles the external mobile-friendliness check.
//
// The verdict is deliberately tri-state: a page that was tested and
// failed is a different fact than a page we could not test at all.
// =============================================================================

mod api;

// Re-export the check and its verdict type
pub use api::{check_mobile_friendly, MobileFriendliness};
