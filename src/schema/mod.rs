//! Selector schema
//!
//! The serialized face of the crate: a [`TextSelector`] accepts either
//! kind of selector plus the shorthand forms (a bare string, a pipe
//! string, a two-number array), and a [`TextPositionSetFactory`]
//! builds sets against one document.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::position::TextPositionSelector;
use crate::quote::TextQuoteSelector;
use crate::set::TextPositionSet;
use crate::text;

/// Either kind of selector, for payloads that accept both.
///
/// Serializes untagged: the two shapes share no required field, so the
/// variant is recovered from the keys alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TextSelector {
    Position(TextPositionSelector),
    Quote(TextQuoteSelector),
}

impl TextSelector {
    /// The position this selector describes in `document`.
    pub fn resolve(&self, document: &str) -> Result<TextPositionSelector> {
        match self {
            TextSelector::Position(position) => Ok(*position),
            TextSelector::Quote(quote) => quote.resolve(document),
        }
    }
}

impl From<TextPositionSelector> for TextSelector {
    fn from(position: TextPositionSelector) -> Self {
        TextSelector::Position(position)
    }
}

impl From<TextQuoteSelector> for TextSelector {
    fn from(quote: TextQuoteSelector) -> Self {
        TextSelector::Quote(quote)
    }
}

/// The shapes a selector may arrive in. Tried in order: a bare or
/// pipe-delimited string, a `[start, end]` pair, then the two full
/// forms keyed by their fields.
#[derive(Deserialize)]
#[serde(untagged)]
enum Shorthand {
    Text(String),
    Pair(usize, usize),
    Position(PositionShorthand),
    Quote(QuoteShorthand),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PositionShorthand {
    #[serde(default)]
    start: usize,
    #[serde(default)]
    end: Option<usize>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct QuoteShorthand {
    #[serde(default)]
    exact: String,
    #[serde(default)]
    prefix: String,
    #[serde(default)]
    suffix: String,
}

impl<'de> Deserialize<'de> for TextSelector {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Shorthand::deserialize(deserializer)? {
            Shorthand::Text(text) => TextQuoteSelector::from_text(&text)
                .map(TextSelector::Quote)
                .map_err(de::Error::custom),
            Shorthand::Pair(start, end) => TextPositionSelector::new(start, end)
                .map(TextSelector::Position)
                .map_err(de::Error::custom),
            Shorthand::Position(raw) => TextPositionSelector::from_parts(raw.start, raw.end)
                .map(TextSelector::Position)
                .map_err(de::Error::custom),
            Shorthand::Quote(raw) => TextQuoteSelector::new(raw.exact, raw.prefix, raw.suffix)
                .map(TextSelector::Quote)
                .map_err(de::Error::custom),
        }
    }
}

/// Builds position sets against one document.
#[derive(Debug, Clone, Copy)]
pub struct TextPositionSetFactory<'a> {
    document: &'a str,
}

impl<'a> TextPositionSetFactory<'a> {
    pub fn new(document: &'a str) -> Self {
        TextPositionSetFactory { document }
    }

    /// A set selecting the whole document, pinned to its current
    /// length. An empty document yields an empty set.
    pub fn everything(&self) -> TextPositionSet {
        match text::char_len(self.document) {
            0 => TextPositionSet::default(),
            len => {
                TextPositionSet::from_selectors([TextPositionSelector::from_raw(0, Some(len))])
            }
        }
    }

    /// A set selecting nothing.
    pub fn nothing(&self) -> TextPositionSet {
        TextPositionSet::default()
    }

    /// Resolve a parsed selection into one normalized set. Quotes are
    /// resolved eagerly so a bad selector fails here, not at render
    /// time.
    pub fn from_selection(&self, selection: &[TextSelector]) -> Result<TextPositionSet> {
        let mut positions = Vec::with_capacity(selection.len());
        for selector in selection {
            positions.push(selector.resolve(self.document)?);
        }
        Ok(TextPositionSet::from_selectors(positions))
    }

    pub fn from_quote_selectors(
        &self,
        quotes: &[TextQuoteSelector],
    ) -> Result<TextPositionSet> {
        let mut positions = Vec::with_capacity(quotes.len());
        for quote in quotes {
            positions.push(quote.resolve(self.document)?);
        }
        Ok(TextPositionSet::from_selectors(positions))
    }

    /// One position per phrase; every phrase must occur exactly once.
    pub fn from_exact_strings(&self, phrases: &[&str]) -> Result<TextPositionSet> {
        let mut positions = Vec::with_capacity(phrases.len());
        for phrase in phrases {
            positions.push(TextQuoteSelector::from_exact(*phrase)?.resolve(self.document)?);
        }
        Ok(TextPositionSet::from_selectors(positions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::SECTION_102A;

    #[test]
    fn test_parse_a_mixed_selection() {
        let json = "[\"authorship\", [5, 10], {\"start\": 0, \"end\": 4}, \
                    {\"exact\": \"works\", \"prefix\": \"sculptural \"}]";
        let selection: Vec<TextSelector> = serde_json::from_str(json).unwrap();
        assert_eq!(selection.len(), 4);
        assert_eq!(
            selection[0],
            TextSelector::Quote(TextQuoteSelector::from_exact("authorship").unwrap())
        );
        assert_eq!(
            selection[1],
            TextSelector::Position(TextPositionSelector::new(5, 10).unwrap())
        );
        assert_eq!(
            selection[2],
            TextSelector::Position(TextPositionSelector::new(0, 4).unwrap())
        );
        assert_eq!(
            selection[3],
            TextSelector::Quote(TextQuoteSelector::new("works", "sculptural ", "").unwrap())
        );
    }

    #[test]
    fn test_parse_pipe_shorthand() {
        let selector: TextSelector =
            serde_json::from_str("\"eats,|shoots,|and leaves\"").unwrap();
        assert_eq!(
            selector,
            TextSelector::Quote(
                TextQuoteSelector::new("shoots,", "eats,", "and leaves").unwrap()
            )
        );
    }

    #[test]
    fn test_empty_map_selects_from_the_start() {
        let selector: TextSelector = serde_json::from_str("{}").unwrap();
        assert_eq!(
            selector,
            TextSelector::Position(TextPositionSelector::unbounded(0))
        );
    }

    #[test]
    fn test_malformed_shorthand_is_rejected() {
        assert!(serde_json::from_str::<TextSelector>("\"a|b\"").is_err());
        assert!(serde_json::from_str::<TextSelector>("[5, 3]").is_err());
        assert!(serde_json::from_str::<TextSelector>("{\"start\": 9, \"end\": 3}").is_err());
        assert!(serde_json::from_str::<TextSelector>("{\"start\": 1, \"exact\": \"x\"}").is_err());
    }

    #[test]
    fn test_selectors_serialize_in_full() {
        let selection = vec![
            TextSelector::from(TextPositionSelector::new(5, 10).unwrap()),
            TextSelector::from(TextPositionSelector::unbounded(3)),
            TextSelector::from(TextQuoteSelector::from_exact("works").unwrap()),
        ];
        assert_eq!(
            serde_json::to_string(&selection).unwrap(),
            "[{\"start\":5,\"end\":10},{\"start\":3},\
             {\"exact\":\"works\",\"prefix\":\"\",\"suffix\":\"\"}]"
        );
    }

    #[test]
    fn test_resolve_goes_through_the_quote() {
        let quote = TextSelector::Quote(
            TextQuoteSelector::new("authorship", "", "include").unwrap(),
        );
        assert_eq!(
            quote.resolve(SECTION_102A).unwrap(),
            TextPositionSelector::new(306, 316).unwrap()
        );
        let position = TextSelector::Position(TextPositionSelector::new(5, 10).unwrap());
        assert_eq!(
            position.resolve("irrelevant").unwrap(),
            TextPositionSelector::new(5, 10).unwrap()
        );
    }

    #[test]
    fn test_factory_everything_and_nothing() {
        let factory = TextPositionSetFactory::new(SECTION_102A);
        assert_eq!(
            factory.everything().positions(),
            [TextPositionSelector::new(0, 631).unwrap()]
        );
        assert!(factory.nothing().is_empty());
        assert!(TextPositionSetFactory::new("").everything().is_empty());
    }

    #[test]
    fn test_factory_resolves_a_selection_eagerly() {
        let factory = TextPositionSetFactory::new(SECTION_102A);
        let selection = vec![
            TextSelector::from(TextPositionSelector::new(65, 79).unwrap()),
            TextSelector::from(TextQuoteSelector::new("authorship", "", "include").unwrap()),
        ];
        let set = factory.from_selection(&selection).unwrap();
        assert_eq!(
            set.positions(),
            [
                TextPositionSelector::new(65, 79).unwrap(),
                TextPositionSelector::new(306, 316).unwrap(),
            ]
        );
    }

    #[test]
    fn test_factory_from_exact_strings() {
        let factory = TextPositionSetFactory::new(SECTION_102A);
        let set = factory
            .from_exact_strings(&["original works of authorship"])
            .unwrap();
        assert_eq!(
            set.positions(),
            [TextPositionSelector::new(65, 93).unwrap()]
        );
    }

    #[test]
    fn test_factory_surfaces_ambiguity() {
        let factory = TextPositionSetFactory::new(SECTION_102A);
        assert!(factory.from_exact_strings(&["works"]).is_err());
        assert!(factory
            .from_quote_selectors(&[TextQuoteSelector::from_exact("works").unwrap()])
            .is_err());
    }
}
