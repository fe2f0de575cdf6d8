//! Selector error types
//!
//! Unified error handling for selector construction, quote resolution,
//! and interval arithmetic.

use thiserror::Error;

/// Longest run of literal text quoted inside an error message.
const EXCERPT_MAX: usize = 100;

/// Unified selector error type
#[derive(Debug, Error)]
pub enum SelectorError {
    /// Construction-time invariant violation
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// Quote resolution found zero or more than one qualifying match
    #[error("Text selection failed: {0}")]
    TextSelection(String),

    /// A shift would push an offset below zero
    #[error("Shift by {shift} would move offset {position} below zero")]
    RangeUnderflow { position: usize, shift: isize },

    /// A selector reaches past the end of the target document
    #[error("Selector reaches offset {end} but the document ends at {len}")]
    OutOfBounds { end: usize, len: usize },

    /// Union of intervals that neither overlap nor touch
    #[error("Cannot merge disjoint intervals {left} and {right}")]
    IncompatibleRanges { left: String, right: String },
}

/// Result type alias for selector operations
pub type Result<T> = std::result::Result<T, SelectorError>;

/// Truncate literal text before quoting it in an error message.
pub(crate) fn excerpt(text: &str) -> String {
    let mut chars = text.chars();
    let cut: String = chars.by_ref().take(EXCERPT_MAX).collect();
    if chars.next().is_some() {
        format!("{}…", cut)
    } else {
        cut
    }
}
