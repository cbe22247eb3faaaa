//! Punctuation strip filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;

/// A filter that removes every ASCII punctuation character from tokens.
///
/// The punctuation set is C's `ispunct` in the "C" locale, i.e.
/// [`char::is_ascii_punctuation`]. Characters are removed wherever they occur
/// in the token, not only at its edges (`"don't"` becomes `"dont"`).
/// Non-ASCII punctuation such as `“` or `—` is kept, which means a term
/// containing it only matches a query spelled with the same characters.
#[derive(Clone, Debug, Default)]
pub struct StripPunctuationFilter;

impl StripPunctuationFilter {
    /// Create a new strip filter.
    pub fn new() -> Self {
        StripPunctuationFilter
    }

    /// Remove ASCII punctuation from a single piece of text.
    pub fn normalize(text: &str) -> String {
        text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
    }
}

impl Filter for StripPunctuationFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        Box::new(tokens.map(|token| {
            if token.text.contains(|c: char| c.is_ascii_punctuation()) {
                let stripped = Self::normalize(&token.text);
                token.with_text(stripped)
            } else {
                token
            }
        }))
    }
}
