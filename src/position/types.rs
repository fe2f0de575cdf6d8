//! Position selector type
//!
//! A position selector names a passage by absolute character offsets:
//! the half-open interval `[start, end)`. The end may be left
//! unbounded, in which case the selector runs to the end of whatever
//! document it is applied to.
//!
//! Reference: <https://www.w3.org/TR/annotation-model/#text-position-selector>

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SelectorError};
use crate::quote::TextQuoteSelector;
use crate::text;

/// Margin growth per attempt while hunting for unique context
const UNIQUE_MARGIN_STEP: usize = 5;

/// A half-open character interval `[start, end)` in some document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition", into = "RawPosition")]
pub struct TextPositionSelector {
    start: usize,
    end: Option<usize>,
}

impl TextPositionSelector {
    /// Create a bounded selector covering `[start, end)`.
    ///
    /// Zero-length and backward intervals are rejected.
    pub fn new(start: usize, end: usize) -> Result<Self> {
        Self::from_parts(start, Some(end))
    }

    /// Create a selector running from `start` to the end of any
    /// document it is later applied to.
    pub fn unbounded(start: usize) -> Self {
        Self { start, end: None }
    }

    /// Create a selector from a start bound and an optional end bound.
    pub fn from_parts(start: usize, end: Option<usize>) -> Result<Self> {
        match end {
            Some(end) if start >= end => Err(SelectorError::InvalidSelector(format!(
                "start {} must be less than end {}",
                start, end
            ))),
            _ => Ok(Self { start, end }),
        }
    }

    /// Build a selector whose bounds are already known to be valid.
    pub(crate) fn from_raw(start: usize, end: Option<usize>) -> Self {
        debug_assert!(end.map_or(true, |e| start < e));
        Self { start, end }
    }

    /// Start offset (inclusive).
    pub fn start(&self) -> usize {
        self.start
    }

    /// End offset (exclusive), or `None` when unbounded.
    pub fn end(&self) -> Option<usize> {
        self.end
    }

    /// Number of characters covered, or `None` when unbounded.
    pub fn length(&self) -> Option<usize> {
        self.end.map(|end| end - self.start)
    }

    /// The document text this selector covers.
    ///
    /// Fails with [`SelectorError::OutOfBounds`] when the selector
    /// reaches past the end of `document`.
    pub fn select_text<'d>(&self, document: &'d str) -> Result<&'d str> {
        let len = text::char_len(document);
        let end = match self.end {
            Some(end) if end > len => return Err(SelectorError::OutOfBounds { end, len }),
            Some(end) => end,
            None if self.start >= len => {
                return Err(SelectorError::OutOfBounds {
                    end: self.start,
                    len,
                })
            }
            None => len,
        };
        Ok(text::slice(document, self.start, end))
    }

    /// Describe the same span by its text and surrounding context.
    ///
    /// `prefix` and `suffix` take up to `left_margin` / `right_margin`
    /// characters immediately outside the interval, clipped at the
    /// document bounds.
    pub fn as_quote(
        &self,
        document: &str,
        left_margin: usize,
        right_margin: usize,
    ) -> Result<TextQuoteSelector> {
        let exact = self.select_text(document)?;
        let len = text::char_len(document);
        let end = self.end.unwrap_or(len);
        let prefix = text::slice(document, self.start.saturating_sub(left_margin), self.start);
        let suffix = text::slice(document, end, end.saturating_add(right_margin).min(len));
        TextQuoteSelector::new(exact, prefix, suffix)
    }

    /// Derive a quote selector with just enough context to resolve
    /// uniquely in `document`, widening the margins step by step.
    pub fn as_unique_quote(&self, document: &str) -> Result<TextQuoteSelector> {
        let len = text::char_len(document);
        let mut margin = 0;
        while margin < len {
            let quote = self.as_quote(document, margin, margin)?;
            if quote.is_unique_in(document) {
                return Ok(quote);
            }
            margin += UNIQUE_MARGIN_STEP;
        }
        self.as_quote(document, len, len)
    }
}

impl Ord for TextPositionSelector {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| match (self.end, other.end) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
    }
}

impl PartialOrd for TextPositionSelector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TextPositionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "[{}, {})", self.start, end),
            None => write!(f, "[{}, ∞)", self.start),
        }
    }
}

impl TryFrom<(usize, usize)> for TextPositionSelector {
    type Error = SelectorError;

    fn try_from(pair: (usize, usize)) -> Result<Self> {
        Self::new(pair.0, pair.1)
    }
}

/// Wire form: `start` before `end`, `end` omitted when unbounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawPosition {
    #[serde(default)]
    start: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end: Option<usize>,
}

impl TryFrom<RawPosition> for TextPositionSelector {
    type Error = SelectorError;

    fn try_from(raw: RawPosition) -> Result<Self> {
        Self::from_parts(raw.start, raw.end)
    }
}

impl From<TextPositionSelector> for RawPosition {
    fn from(selector: TextPositionSelector) -> Self {
        Self {
            start: selector.start,
            end: selector.end,
        }
    }
}
