//! Position set operations
//!
//! Set algebra over normalized interval lists plus the operations that
//! need a document: resolving quotes, closing small gaps, extracting
//! text.

use crate::error::Result;
use crate::position::TextPositionSelector;
use crate::quote::TextQuoteSelector;
use crate::sequence::{self, TextSequence};
use crate::text;

use super::TextPositionSet;

/// Characters a gap may consist of and still be closed over.
const GAP_CHARACTERS: &str = ",.\"' ;[]()";

impl TextPositionSet {
    /// Everything in either set. Quote selectors from both sides are
    /// kept.
    pub fn union(&self, other: &Self) -> Self {
        let positions = self
            .positions()
            .iter()
            .chain(other.positions())
            .copied()
            .collect();
        let quotes = self
            .quotes()
            .iter()
            .chain(other.quotes())
            .cloned()
            .collect();
        Self::new(positions, quotes)
    }

    /// The spans present in both sets. Quote selectors are dropped;
    /// resolve them first if they should take part.
    pub fn intersect(&self, other: &Self) -> Self {
        let (ours, theirs) = (self.positions(), other.positions());
        let mut common = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < ours.len() && j < theirs.len() {
            if let Some(overlap) = ours[i].intersect(&theirs[j]) {
                common.push(overlap);
            }
            // advance whichever interval ends first
            match (ours[i].end(), theirs[j].end()) {
                (Some(a), Some(b)) if a <= b => i += 1,
                (Some(_), Some(_)) => j += 1,
                (Some(_), None) => i += 1,
                (None, _) => j += 1,
            }
        }
        Self::from_selectors(common)
    }

    /// The spans of `self` not covered by `other`. Quote selectors of
    /// `self` are kept.
    pub fn difference(&self, other: &Self) -> Self {
        let mut kept = Vec::new();
        for interval in self.positions() {
            carve(*interval, other.positions(), &mut kept);
        }
        Self::new(kept, self.quotes().to_vec())
    }

    /// Move every interval by `n` characters.
    ///
    /// Fails with [`RangeUnderflow`](crate::SelectorError::RangeUnderflow)
    /// as soon as one interval would start below zero.
    pub fn shift(&self, n: isize) -> Result<Self> {
        let mut shifted = Vec::with_capacity(self.positions().len());
        for position in self.positions() {
            shifted.push(position.shift(n)?);
        }
        Ok(Self::new(shifted, self.quotes().to_vec()))
    }

    /// Widen every interval, clipping the left edge at zero. Intervals
    /// grown into each other merge.
    pub fn add_margin(&self, left: usize, right: usize) -> Self {
        let widened = self
            .positions()
            .iter()
            .map(|position| {
                TextPositionSelector::from_raw(
                    position.start().saturating_sub(left),
                    position.end().map(|end| end.saturating_add(right)),
                )
            })
            .collect();
        Self::new(widened, self.quotes().to_vec())
    }

    /// Replace every quote selector with the position it resolves to
    /// in `document`. The first quote that fails to resolve aborts the
    /// whole conversion.
    pub fn resolve_quotes(&self, document: &str) -> Result<Self> {
        let mut positions: Vec<TextPositionSelector> = self.positions().to_vec();
        for quote in self.quotes() {
            positions.push(quote.resolve(document)?);
        }
        tracing::debug!("Resolved {} quote selectors into positions", self.quotes().len());
        Ok(Self::from_selectors(positions))
    }

    /// True when every span of `other` lies inside a span of `self`.
    pub fn covers(&self, other: &Self) -> bool {
        self.intersect(other).positions() == other.positions()
    }

    /// True when the selector lies inside one of this set's spans.
    pub fn covers_selector(&self, selector: &TextPositionSelector) -> bool {
        self.positions()
            .iter()
            .any(|position| position.covers(selector))
    }

    /// Merge neighbouring intervals whose gap is at most `max_gap`
    /// characters of punctuation or whitespace. Intervals are clipped
    /// to the document; spans that start past its end are dropped.
    pub fn close_gaps(&self, document: &str, max_gap: usize) -> Self {
        let len = text::char_len(document);
        let mut merged: Vec<(usize, usize)> = Vec::new();
        for position in self.positions() {
            let start = position.start();
            if start >= len {
                break;
            }
            let end = position.end().map_or(len, |end| end.min(len));
            match merged.last_mut() {
                Some((_, last_end))
                    if start <= *last_end + max_gap
                        && bridgeable(document, *last_end, start) =>
                {
                    *last_end = end;
                }
                _ => merged.push((start, end)),
            }
        }
        let positions = merged
            .into_iter()
            .map(|(start, end)| TextPositionSelector::from_raw(start, Some(end)))
            .collect();
        Self::new(positions, self.quotes().to_vec())
    }

    /// The selected passages of `document` with gap markers between
    /// them, as one string.
    pub fn select_text(&self, document: &str) -> Result<String> {
        Ok(self.as_text_sequence(document)?.to_string())
    }

    /// Walk `document` and split it into selected and skipped
    /// segments.
    pub fn as_text_sequence(&self, document: &str) -> Result<TextSequence> {
        sequence::render(document, self)
    }

    /// A quote selector for every span, each pinned down with just
    /// enough context to be unique in `document`, followed by the
    /// quotes the set already holds.
    pub fn as_quotes(&self, document: &str) -> Result<Vec<TextQuoteSelector>> {
        let mut quotes = Vec::with_capacity(self.positions().len() + self.quotes().len());
        for position in self.positions() {
            quotes.push(position.as_unique_quote(document)?);
        }
        quotes.extend(self.quotes().iter().cloned());
        Ok(quotes)
    }
}

/// Push the parts of `interval` not covered by any of the sorted
/// `cuts`.
fn carve(
    interval: TextPositionSelector,
    cuts: &[TextPositionSelector],
    out: &mut Vec<TextPositionSelector>,
) {
    let mut cursor = interval.start();
    for cut in cuts {
        if let Some(limit) = interval.end() {
            if cut.start() >= limit {
                break;
            }
        }
        if cut.end().is_some_and(|cut_end| cut_end <= cursor) {
            continue;
        }
        if cut.start() > cursor {
            out.push(TextPositionSelector::from_raw(cursor, Some(cut.start())));
        }
        match cut.end() {
            // an unbounded cut removes the rest of the interval
            None => return,
            Some(cut_end) => cursor = cursor.max(cut_end),
        }
    }
    match interval.end() {
        None => out.push(TextPositionSelector::from_raw(cursor, None)),
        Some(end) if cursor < end => out.push(TextPositionSelector::from_raw(cursor, Some(end))),
        _ => {}
    }
}

/// True when the characters between the two offsets are all gap
/// characters.
fn bridgeable(document: &str, from: usize, to: usize) -> bool {
    text::slice(document, from, to)
        .chars()
        .all(|c| GAP_CHARACTERS.contains(c))
}
