//! Text sequences
//!
//! Applying a position set to a document yields an ordered sequence of
//! selected and skipped text, ready to print or compare.

mod render;
mod types;

// Re-export main types
pub use render::render;
pub use types::{TextSegment, TextSequence, ELLIPSIS};
