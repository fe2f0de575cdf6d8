//! Sequence rendering
//!
//! Walks a document once, cutting it into the segments a position set
//! selects and the gaps in between.

use crate::error::Result;
use crate::set::TextPositionSet;
use crate::text;

use super::{TextSegment, TextSequence};

/// Split `document` into the segments `set` selects and the gaps
/// around them.
///
/// Quote selectors held by the set are resolved first, so this fails
/// the way [`resolve_quotes`](TextPositionSet::resolve_quotes) does.
/// Spans reaching past the end of the document are clipped; spans
/// starting past it contribute nothing.
pub fn render(document: &str, set: &TextPositionSet) -> Result<TextSequence> {
    let resolved = set.resolve_quotes(document)?;
    let len = text::char_len(document);
    if len == 0 {
        return Ok(TextSequence::default());
    }
    let mut segments = Vec::new();
    let mut cursor = 0;
    for position in resolved.positions() {
        let start = position.start();
        if start >= len {
            break;
        }
        let end = position.end().map_or(len, |end| end.min(len));
        if start > cursor {
            segments.push(TextSegment::gap(text::slice(document, cursor, start)));
        }
        segments.push(TextSegment::included(text::slice(document, start, end)));
        cursor = end;
    }
    if cursor < len {
        segments.push(TextSegment::gap(text::slice(document, cursor, len)));
    }
    Ok(TextSequence::new(segments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{SECTION_102A, SECTION_102B};
    use crate::position::TextPositionSelector;
    use crate::quote::TextQuoteSelector;

    fn set(intervals: &[(usize, usize)]) -> TextPositionSet {
        intervals
            .iter()
            .map(|&(start, end)| TextPositionSelector::new(start, end).unwrap())
            .collect()
    }

    #[test]
    fn test_render_splits_the_document_around_the_spans() {
        let sequence = render(SECTION_102A, &set(&[(65, 79), (100, 136)])).unwrap();
        let segments = sequence.segments();
        assert_eq!(segments.len(), 5);
        assert!(!segments[0].included);
        assert_eq!(segments[1], TextSegment::included("original works"));
        assert_eq!(segments[2], TextSegment::gap(" of authorship fixed "));
        assert_eq!(
            segments[3],
            TextSegment::included("in any tangible medium of expression")
        );
        assert!(!segments[4].included);
    }

    #[test]
    fn test_render_of_an_empty_set_is_one_gap() {
        let sequence = render(SECTION_102A, &TextPositionSet::default()).unwrap();
        assert_eq!(sequence.segments().len(), 1);
        assert!(!sequence.segments()[0].included);
        assert_eq!(sequence.to_string(), "");
        assert_eq!(sequence.preview(), "");
    }

    #[test]
    fn test_render_of_an_empty_document() {
        let sequence = render("", &TextPositionSet::default()).unwrap();
        assert!(sequence.is_empty());
    }

    #[test]
    fn test_render_with_a_span_at_the_document_start() {
        let sequence = render(SECTION_102A, &set(&[(0, 9)])).unwrap();
        assert_eq!(sequence.segments()[0], TextSegment::included("Copyright"));
    }

    #[test]
    fn test_render_resolves_quote_selectors() {
        let quotes = TextPositionSet::from_quotes([
            TextQuoteSelector::new("authorship", "", "include").unwrap(),
        ]);
        let sequence = render(SECTION_102A, &quotes).unwrap();
        assert_eq!(sequence.segments()[1], TextSegment::included("authorship"));

        let ambiguous = TextPositionSet::from_quotes([
            TextQuoteSelector::from_exact("works").unwrap(),
        ]);
        assert!(render(SECTION_102A, &ambiguous).is_err());
    }

    #[test]
    fn test_render_clips_spans_to_the_document() {
        let sequence = render(SECTION_102A, &set(&[(620, 800)])).unwrap();
        let segments = sequence.segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1], TextSegment::included("ural works."));

        let open = TextPositionSet::from_selectors([TextPositionSelector::unbounded(620)]);
        let sequence = render(SECTION_102A, &open).unwrap();
        assert_eq!(sequence.segments()[1], TextSegment::included("ural works."));

        let past = render(SECTION_102A, &set(&[(65, 79), (700, 800)])).unwrap();
        let segments = past.segments();
        assert_eq!(segments.len(), 3);
        assert!(!segments[2].included);
    }

    #[test]
    fn test_preview_and_display_of_a_rendered_sequence() {
        let sequence = render(SECTION_102A, &set(&[(65, 79), (100, 136)])).unwrap();
        assert_eq!(
            sequence.preview(),
            "original works…in any tangible medium of expression"
        );
        assert_eq!(
            sequence.to_string(),
            "…original works…in any tangible medium of expression…"
        );
    }

    #[test]
    fn test_rendered_sequence_means_a_handcrafted_one() {
        let quotes = TextPositionSet::from_quotes([
            TextQuoteSelector::from_exact("In no case does copyright protection").unwrap(),
            TextQuoteSelector::from_exact("extend to any idea").unwrap(),
        ]);
        let rendered = render(SECTION_102B, &quotes).unwrap();
        // the rendered sequence carries boundary gaps; the handcrafted
        // one does not
        let handcrafted = TextSequence::new(vec![
            TextSegment::gap(""),
            TextSegment::included("In no case does copyright protection"),
            TextSegment::gap(""),
            TextSegment::included("extend to any idea"),
        ]);
        assert!(rendered.means(&handcrafted));
        assert!(handcrafted.means(&rendered));
    }

    #[test]
    fn test_full_passage_implies_selections_drawn_from_it() {
        let selections = TextPositionSet::from_quotes([
            TextQuoteSelector::from_exact("In no case does copyright protection").unwrap(),
            TextQuoteSelector::from_exact("extend to any idea").unwrap(),
        ]);
        let part = render(SECTION_102B, &selections).unwrap();
        let full = render(SECTION_102B, &set(&[(0, 200)])).unwrap();
        assert!(full.implies(&part));
        assert!(!part.implies(&full));
    }
}
