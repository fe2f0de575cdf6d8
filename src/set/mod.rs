//! Position sets
//!
//! Groups of selectors over one document, kept in normal form and
//! combinable with set algebra.

mod algebra;
mod types;

// Re-export main types
pub use types::TextPositionSet;
