//! Position selectors
//!
//! Absolute character intervals over a document and the arithmetic
//! between them.

mod algebra;
mod types;

// Re-export main types
pub use types::TextPositionSelector;
