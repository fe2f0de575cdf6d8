//! Quote selectors
//!
//! Selectors that pin a passage by its text rather than its offsets,
//! in the shape of the W3C TextQuoteSelector: an exact phrase plus
//! optional prefix and suffix context.
//!
//! Reference: <https://www.w3.org/TR/annotation-model/#text-quote-selector>

mod resolver;
mod types;

// Re-export main types
pub use types::TextQuoteSelector;
