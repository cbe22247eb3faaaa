//! ASCII lowercase filter implementation.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;

/// A filter that folds ASCII letters to lowercase.
///
/// Only `A`..=`Z` are changed. Every other character, including non-ASCII
/// letters such as `É`, passes through unchanged, so the filter never alters
/// the byte length of a token.
#[derive(Clone, Debug, Default)]
pub struct AsciiLowercaseFilter;

impl AsciiLowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        AsciiLowercaseFilter
    }

    /// Lowercase a single piece of text.
    pub fn normalize(text: &str) -> String {
        text.to_ascii_lowercase()
    }
}

impl Filter for AsciiLowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        Box::new(tokens.map(|token| {
            let lowered = Self::normalize(&token.text);
            token.with_text(lowered)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_lowercase_filter() {
        let filter = AsciiLowercaseFilter::new();
        let tokens = vec![
            Token::new("Hello", 0),
            Token::new("WORLD", 1),
            Token::new("ÉCOLE", 2),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "École");
    }
}
