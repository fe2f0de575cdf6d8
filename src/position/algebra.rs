//! Interval algebra
//!
//! Pairwise arithmetic between position selectors. Set-level algebra
//! builds on these primitives in [`crate::set`].

use crate::error::{Result, SelectorError};
use crate::set::TextPositionSet;

use super::TextPositionSelector;

/// True when `end` (`None` = unbounded) lies strictly beyond `point`.
fn extends_past(end: Option<usize>, point: usize) -> bool {
    end.map_or(true, |e| e > point)
}

/// Translate `bound` by `by`, or `None` on underflow.
fn shift_bound(bound: usize, by: isize) -> Option<usize> {
    if by >= 0 {
        Some(bound.saturating_add(by as usize))
    } else {
        bound.checked_sub(by.unsigned_abs())
    }
}

impl TextPositionSelector {
    /// True when the two intervals share at least one character.
    pub fn overlaps(&self, other: &Self) -> bool {
        extends_past(self.end(), other.start()) && extends_past(other.end(), self.start())
    }

    /// True when one interval ends exactly where the other starts.
    pub fn touches(&self, other: &Self) -> bool {
        self.end() == Some(other.start()) || other.end() == Some(self.start())
    }

    /// Merge two intervals known to overlap or touch.
    pub(crate) fn merge(&self, other: &Self) -> Self {
        let end = match (self.end(), other.end()) {
            (Some(a), Some(b)) => Some(a.max(b)),
            _ => None,
        };
        Self::from_raw(self.start().min(other.start()), end)
    }

    /// Merge with an overlapping or adjacent selector into one interval.
    ///
    /// Disjoint inputs fail with [`SelectorError::IncompatibleRanges`];
    /// use [`combine`](Self::combine) to fall back to a set instead.
    pub fn union(&self, other: &Self) -> Result<Self> {
        if self.overlaps(other) || self.touches(other) {
            Ok(self.merge(other))
        } else {
            Err(SelectorError::IncompatibleRanges {
                left: self.to_string(),
                right: other.to_string(),
            })
        }
    }

    /// Combine with another selector, falling back to a two-interval
    /// set when they are disjoint.
    pub fn combine(&self, other: &Self) -> TextPositionSet {
        TextPositionSet::from_selectors([*self, *other])
    }

    /// The interval both selectors cover, or `None` when they are
    /// disjoint (zero-length selectors do not exist).
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }
        let start = self.start().max(other.start());
        let end = match (self.end(), other.end()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, other_end) => other_end,
        };
        Some(Self::from_raw(start, end))
    }

    /// True when every character of `other` lies inside `self`.
    pub fn covers(&self, other: &Self) -> bool {
        let end_ok = match (self.end(), other.end()) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(mine), Some(theirs)) => theirs <= mine,
        };
        other.start() >= self.start() && end_ok
    }

    /// True when `self` covers `other` and they are not the same
    /// interval.
    pub fn strictly_covers(&self, other: &Self) -> bool {
        self.covers(other) && self != other
    }

    /// Translate both bounds by `n` characters.
    ///
    /// Moving the start below zero fails with
    /// [`SelectorError::RangeUnderflow`]. For a valid selector the end
    /// cannot underflow while the start stays non-negative, so the
    /// start bound carries the whole policy.
    pub fn shift(&self, n: isize) -> Result<Self> {
        let start = shift_bound(self.start(), n).ok_or(SelectorError::RangeUnderflow {
            position: self.start(),
            shift: n,
        })?;
        let end = match self.end() {
            Some(end) => Some(shift_bound(end, n).ok_or(SelectorError::RangeUnderflow {
                position: end,
                shift: n,
            })?),
            None => None,
        };
        Ok(Self::from_raw(start, end))
    }
}
