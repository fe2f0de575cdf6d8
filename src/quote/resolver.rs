//! Quote resolution
//!
//! Turns a quote selector into concrete offsets by scanning a document
//! for the exact phrase and holding every occurrence against the
//! selector's context. Resolution is fail-closed: zero or several
//! qualifying occurrences is an error, never a silent first match.

use crate::error::{excerpt, Result, SelectorError};
use crate::position::TextPositionSelector;
use crate::text;

use super::TextQuoteSelector;

impl TextQuoteSelector {
    /// Locate the span this selector describes in `document`.
    ///
    /// With a non-empty exact phrase, every occurrence (overlapping
    /// ones included) is enumerated and the prefix/suffix must single
    /// one out. A context-only selector instead locates its prefix and
    /// suffix, each of which must occur exactly once, and spans the
    /// text between them.
    ///
    /// A run of whitespace may sit between the context and the phrase;
    /// the phrase itself is matched verbatim.
    pub fn resolve(&self, document: &str) -> Result<TextPositionSelector> {
        if self.exact().is_empty() {
            self.resolve_between(document)
        } else {
            self.resolve_exact(document)
        }
    }

    /// Alias for [`resolve`](Self::resolve).
    pub fn as_position(&self, document: &str) -> Result<TextPositionSelector> {
        self.resolve(document)
    }

    /// The document text this selector locates.
    pub fn select_text<'d>(&self, document: &'d str) -> Result<&'d str> {
        self.resolve(document)?.select_text(document)
    }

    /// True when the selector pins down exactly one span of `document`.
    pub fn is_unique_in(&self, document: &str) -> bool {
        self.resolve(document).is_ok()
    }

    /// Fill in the exact phrase of a context-only selector by reading
    /// it from `document`. A selector that already has one is returned
    /// unchanged.
    pub fn rebuild_from(&self, document: &str) -> Result<Self> {
        if !self.exact().is_empty() {
            return Ok(self.clone());
        }
        let exact = self.select_text(document)?;
        Self::new(exact, self.prefix(), self.suffix())
    }

    fn resolve_exact(&self, document: &str) -> Result<TextPositionSelector> {
        let hits = text::find_all_bytes(document, self.exact());
        let survivors: Vec<usize> = hits
            .iter()
            .copied()
            .filter(|&at| self.context_matches(document, at, at + self.exact().len()))
            .collect();
        tracing::debug!(
            "Found {} occurrences of the exact phrase, {} qualifying",
            hits.len(),
            survivors.len()
        );
        match survivors.as_slice() {
            [at] => {
                let start = text::char_at_byte(document, *at);
                let end = start + text::char_len(self.exact());
                Ok(TextPositionSelector::from_raw(start, Some(end)))
            }
            [] if hits.is_empty() => Err(SelectorError::TextSelection(format!(
                "no match found for \"{}\"",
                self
            ))),
            [] => Err(SelectorError::TextSelection(format!(
                "no occurrence of \"{}\" fits its context",
                self
            ))),
            _ => Err(SelectorError::TextSelection(format!(
                "\"{}\" is ambiguous: {} qualifying occurrences",
                self,
                survivors.len()
            ))),
        }
    }

    /// True when the text around the byte span `[from, to)` matches
    /// the selector's context, trimmed, across an ignorable whitespace
    /// run.
    fn context_matches(&self, document: &str, from: usize, to: usize) -> bool {
        let prefix = self.prefix().trim();
        if !prefix.is_empty() && !document[..from].trim_end().ends_with(prefix) {
            return false;
        }
        let suffix = self.suffix().trim();
        if !suffix.is_empty() && !document[to..].trim_start().starts_with(suffix) {
            return false;
        }
        true
    }

    /// Resolve a context-only selector: the span between a unique
    /// prefix occurrence and a unique suffix occurrence, with the
    /// whitespace bordering the context trimmed away.
    fn resolve_between(&self, document: &str) -> Result<TextPositionSelector> {
        let start = match self.prefix().trim() {
            "" => 0,
            prefix => {
                let at = locate_context(document, prefix, "prefix")?;
                let after = &document[at + prefix.len()..];
                at + prefix.len() + (after.len() - after.trim_start().len())
            }
        };
        let end = match self.suffix().trim() {
            "" => document.len(),
            suffix => {
                let at = locate_context(document, suffix, "suffix")?;
                document[..at].trim_end().len()
            }
        };
        if start >= end {
            return Err(SelectorError::TextSelection(format!(
                "no text lies between the context of \"{}\"",
                self
            )));
        }
        Ok(TextPositionSelector::from_raw(
            text::char_at_byte(document, start),
            Some(text::char_at_byte(document, end)),
        ))
    }
}

/// Byte offset of the unique occurrence of a context string.
fn locate_context(document: &str, needle: &str, role: &str) -> Result<usize> {
    let hits = text::find_all_bytes(document, needle);
    match hits.as_slice() {
        [at] => Ok(*at),
        [] => Err(SelectorError::TextSelection(format!(
            "no match found for {} \"{}\"",
            role,
            excerpt(needle)
        ))),
        _ => Err(SelectorError::TextSelection(format!(
            "{} \"{}\" is ambiguous: {} occurrences",
            role,
            excerpt(needle),
            hits.len()
        ))),
    }
}
