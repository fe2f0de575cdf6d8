//! Quote selector type
//!
//! A quote selector names a passage by what it says: an exact phrase
//! plus optional surrounding context to pin down which occurrence is
//! meant. It carries no offsets, so it survives refetching or
//! re-rendering the document it was taken from.
//!
//! Reference: <https://www.w3.org/TR/annotation-model/#text-quote-selector>

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{excerpt, Result, SelectorError};

/// A context-described span: `exact` plus optional `prefix`/`suffix`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawQuote", into = "RawQuote")]
pub struct TextQuoteSelector {
    exact: String,
    prefix: String,
    suffix: String,
}

impl TextQuoteSelector {
    /// Create a selector; empty strings mean "absent".
    ///
    /// A selector with no exact phrase and no usable context cannot
    /// locate anything and is rejected.
    pub fn new(
        exact: impl Into<String>,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Result<Self> {
        let exact = exact.into();
        let prefix = prefix.into();
        let suffix = suffix.into();
        if exact.is_empty() && prefix.trim().is_empty() && suffix.trim().is_empty() {
            return Err(SelectorError::InvalidSelector(
                "a quote selector needs an exact phrase or some usable context".to_string(),
            ));
        }
        Ok(Self {
            exact,
            prefix,
            suffix,
        })
    }

    /// Create a selector from just an exact phrase.
    pub fn from_exact(exact: impl Into<String>) -> Result<Self> {
        Self::new(exact, String::new(), String::new())
    }

    /// Parse the pipe shorthand `prefix|exact|suffix`.
    ///
    /// A string without pipes is all exact phrase; any pipe count other
    /// than zero or two is rejected.
    pub fn from_text(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.split('|').collect();
        match parts.as_slice() {
            [exact] => Self::from_exact(*exact),
            [prefix, exact, suffix] => Self::new(*exact, *prefix, *suffix),
            _ => Err(SelectorError::InvalidSelector(format!(
                "shorthand needs zero or two pipes: {}",
                excerpt(text)
            ))),
        }
    }

    /// The phrase itself (empty for context-only selectors).
    pub fn exact(&self) -> &str {
        &self.exact
    }

    /// Context immediately before the phrase.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Context immediately after the phrase.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl fmt::Display for TextQuoteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prefix.is_empty() && self.suffix.is_empty() {
            write!(f, "{}", excerpt(&self.exact))
        } else {
            write!(
                f,
                "{}|{}|{}",
                excerpt(&self.prefix),
                excerpt(&self.exact),
                excerpt(&self.suffix)
            )
        }
    }
}

/// Wire form: `exact`, `prefix`, `suffix`, all present, all defaulting
/// to empty on input.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawQuote {
    #[serde(default)]
    exact: String,
    #[serde(default)]
    prefix: String,
    #[serde(default)]
    suffix: String,
}

impl TryFrom<RawQuote> for TextQuoteSelector {
    type Error = SelectorError;

    fn try_from(raw: RawQuote) -> Result<Self> {
        Self::new(raw.exact, raw.prefix, raw.suffix)
    }
}

impl From<TextQuoteSelector> for RawQuote {
    fn from(selector: TextQuoteSelector) -> Self {
        Self {
            exact: selector.exact,
            prefix: selector.prefix,
            suffix: selector.suffix,
        }
    }
}
