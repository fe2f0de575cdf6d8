//! Position set value type
//!
//! A collection of selectors held in normal form: position selectors
//! sorted with overlapping or touching intervals merged, quote
//! selectors deduplicated. Every constructor and operation returns a
//! set already in this form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::position::TextPositionSelector;
use crate::quote::TextQuoteSelector;

/// A normalized group of position and quote selectors over one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "RawSet", into = "RawSet")]
pub struct TextPositionSet {
    positions: Vec<TextPositionSelector>,
    quotes: Vec<TextQuoteSelector>,
}

impl TextPositionSet {
    /// Build a set from both kinds of selector, normalizing as it goes.
    pub fn new(
        positions: Vec<TextPositionSelector>,
        quotes: Vec<TextQuoteSelector>,
    ) -> Self {
        let mut deduped: Vec<TextQuoteSelector> = Vec::with_capacity(quotes.len());
        for quote in quotes {
            if !deduped.contains(&quote) {
                deduped.push(quote);
            }
        }
        TextPositionSet {
            positions: normalize(positions),
            quotes: deduped,
        }
    }

    /// Build a set of position selectors alone.
    pub fn from_selectors(positions: impl IntoIterator<Item = TextPositionSelector>) -> Self {
        Self::new(positions.into_iter().collect(), Vec::new())
    }

    /// Build a set of quote selectors alone.
    pub fn from_quotes(quotes: impl IntoIterator<Item = TextQuoteSelector>) -> Self {
        Self::new(Vec::new(), quotes.into_iter().collect())
    }

    /// The position selectors, sorted and non-overlapping.
    pub fn positions(&self) -> &[TextPositionSelector] {
        &self.positions
    }

    /// The quote selectors, first occurrence of each.
    pub fn quotes(&self) -> &[TextQuoteSelector] {
        &self.quotes
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.quotes.is_empty()
    }
}

/// Sort intervals and merge every overlapping or touching pair.
fn normalize(mut positions: Vec<TextPositionSelector>) -> Vec<TextPositionSelector> {
    positions.sort();
    let mut merged: Vec<TextPositionSelector> = Vec::with_capacity(positions.len());
    for position in positions {
        match merged.last_mut() {
            Some(last) if last.overlaps(&position) || last.touches(&position) => {
                *last = last.merge(&position);
            }
            _ => merged.push(position),
        }
    }
    merged
}

impl PartialEq for TextPositionSet {
    /// Positions compare in order; quotes compare as a set.
    fn eq(&self, other: &Self) -> bool {
        self.positions == other.positions
            && self.quotes.len() == other.quotes.len()
            && self.quotes.iter().all(|quote| other.quotes.contains(quote))
    }
}

impl Eq for TextPositionSet {}

impl From<TextPositionSelector> for TextPositionSet {
    fn from(selector: TextPositionSelector) -> Self {
        Self::from_selectors([selector])
    }
}

impl From<TextQuoteSelector> for TextPositionSet {
    fn from(quote: TextQuoteSelector) -> Self {
        Self::from_quotes([quote])
    }
}

impl FromIterator<TextPositionSelector> for TextPositionSet {
    fn from_iter<I: IntoIterator<Item = TextPositionSelector>>(iter: I) -> Self {
        Self::from_selectors(iter)
    }
}

impl fmt::Display for TextPositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, position) in self.positions.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", position)?;
        }
        if !self.quotes.is_empty() {
            if !self.positions.is_empty() {
                write!(f, " ")?;
            }
            let noun = if self.quotes.len() == 1 { "quote" } else { "quotes" };
            write!(f, "+ {} {}", self.quotes.len(), noun)?;
        }
        write!(f, "}}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawSet {
    #[serde(default)]
    positions: Vec<TextPositionSelector>,
    #[serde(default)]
    quotes: Vec<TextQuoteSelector>,
}

impl From<RawSet> for TextPositionSet {
    fn from(raw: RawSet) -> Self {
        TextPositionSet::new(raw.positions, raw.quotes)
    }
}

impl From<TextPositionSet> for RawSet {
    fn from(set: TextPositionSet) -> Self {
        RawSet {
            positions: set.positions,
            quotes: set.quotes,
        }
    }
}
