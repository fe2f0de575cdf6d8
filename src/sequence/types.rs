//! Text sequence types
//!
//! The result of applying a position set to a document: the document's
//! text split into selected passages and skipped gaps, in order.

use std::fmt;

/// Marker standing in for skipped text when a sequence is shown.
pub const ELLIPSIS: &str = "…";

/// One run of document text, either selected or skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSegment {
    pub text: String,
    pub included: bool,
}

impl TextSegment {
    /// A selected passage.
    pub fn included(text: impl Into<String>) -> Self {
        TextSegment {
            text: text.into(),
            included: true,
        }
    }

    /// A skipped stretch of text.
    pub fn gap(text: impl Into<String>) -> Self {
        TextSegment {
            text: text.into(),
            included: false,
        }
    }

    /// True when two segments say the same thing. Gaps always do;
    /// selected passages compare with surrounding punctuation trimmed.
    pub fn means(&self, other: &Self) -> bool {
        self.included == other.included
            && (!self.included || trim_marks(&self.text) == trim_marks(&other.text))
    }
}

fn trim_marks(text: &str) -> &str {
    text.trim_matches(|c: char| ",:;. ".contains(c))
}

/// A document split into selected and skipped segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSequence {
    segments: Vec<TextSegment>,
}

impl TextSequence {
    pub fn new(segments: Vec<TextSegment>) -> Self {
        TextSequence { segments }
    }

    pub fn segments(&self) -> &[TextSegment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TextSegment> {
        self.segments.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The selected passages alone, separated by an ellipsis wherever
    /// skipped text sat between them. Outer gaps are not shown.
    pub fn preview(&self) -> String {
        let mut rendered = String::new();
        let mut pending_gap = false;
        for segment in &self.segments {
            if !segment.included {
                if !rendered.is_empty() && !segment.text.is_empty() {
                    pending_gap = true;
                }
                continue;
            }
            if pending_gap {
                rendered.push_str(ELLIPSIS);
            } else if !rendered.is_empty() {
                rendered.push(' ');
            }
            rendered.push_str(&segment.text);
            pending_gap = false;
        }
        rendered
    }

    /// Drop leading and trailing gaps, keeping inner ones.
    pub fn strip(&self) -> Self {
        let first = match self.segments.iter().position(|segment| segment.included) {
            Some(first) => first,
            None => return Self::default(),
        };
        let last = match self.segments.iter().rposition(|segment| segment.included) {
            Some(last) => last,
            None => return Self::default(),
        };
        TextSequence {
            segments: self.segments[first..=last].to_vec(),
        }
    }

    /// True when both sequences select the same passages, compared
    /// segment by segment once leading and trailing gaps are dropped.
    pub fn means(&self, other: &Self) -> bool {
        let (ours, theirs) = (self.strip(), other.strip());
        ours.segments.len() == theirs.segments.len()
            && ours
                .segments
                .iter()
                .zip(&theirs.segments)
                .all(|(a, b)| a.means(b))
    }

    /// True when every passage `other` selects appears within some
    /// passage this sequence selects. Gaps in `other` constrain
    /// nothing, and one passage may satisfy several of `other`'s.
    pub fn implies(&self, other: &Self) -> bool {
        other
            .segments
            .iter()
            .filter(|segment| segment.included)
            .all(|needle| {
                let wanted = trim_marks(&needle.text);
                self.segments
                    .iter()
                    .filter(|segment| segment.included)
                    .any(|segment| segment.text.contains(wanted))
            })
    }

    /// Append another sequence, fusing the gap on each side of the
    /// seam into one.
    pub fn concat(&self, other: &Self) -> Self {
        let mut segments = self.segments.clone();
        for segment in &other.segments {
            match segments.last_mut() {
                Some(last) if !last.included && !segment.included => {
                    last.text.push_str(&segment.text);
                }
                _ => segments.push(segment.clone()),
            }
        }
        TextSequence { segments }
    }
}

impl fmt::Display for TextSequence {
    /// Selected passages with every skipped stretch shown as an
    /// ellipsis, leading and trailing ones included. A sequence with
    /// no selected text renders as nothing at all.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = String::new();
        for segment in &self.segments {
            if segment.included {
                if !rendered.is_empty()
                    && !rendered.ends_with(ELLIPSIS)
                    && !rendered.ends_with(' ')
                {
                    rendered.push(' ');
                }
                rendered.push_str(&segment.text);
            } else if !rendered.ends_with(ELLIPSIS) {
                rendered.push_str(ELLIPSIS);
            }
        }
        if rendered == ELLIPSIS {
            rendered.clear();
        }
        f.write_str(&rendered)
    }
}
