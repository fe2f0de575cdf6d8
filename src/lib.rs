//! Anclaje
//!
//! Anchor passages of text in a document with selectors in the manner
//! of the W3C Web Annotation model: a position selector names a span
//! by character offsets, a quote selector names it by its text and
//! surrounding context. Selectors survive serialization, combine into
//! normalized sets, and resolve back to concrete spans.
//!
//! # Modules
//!
//! - `position`: Offset-based selectors and their interval algebra
//! - `quote`: Phrase-based selectors and their resolution
//! - `set`: Normalized groups of selectors with set algebra
//! - `sequence`: Selected text split into passages and gaps
//! - `schema`: Shorthand deserialization and the set factory
//! - `error`: The error type shared by every fallible operation
//!
//! ```
//! use anclaje::TextQuoteSelector;
//!
//! let document = "Works of authorship include literary works and musical works.";
//! let quote = TextQuoteSelector::new("works", "literary", "")?;
//! let span = quote.resolve(document)?;
//! assert_eq!(span.select_text(document)?, "works");
//! # Ok::<(), anclaje::SelectorError>(())
//! ```

pub mod error;
pub mod position;
pub mod quote;
pub mod schema;
pub mod sequence;
pub mod set;

mod text;

// Re-export the main types
pub use error::{Result, SelectorError};
pub use position::TextPositionSelector;
pub use quote::TextQuoteSelector;
pub use schema::{TextPositionSetFactory, TextSelector};
pub use sequence::{render, TextSegment, TextSequence, ELLIPSIS};
pub use set::TextPositionSet;
