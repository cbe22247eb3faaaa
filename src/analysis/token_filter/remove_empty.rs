//! Remove empty filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;

/// A filter that drops tokens whose text is empty.
///
/// Placed after [`StripPunctuationFilter`](super::strip::StripPunctuationFilter)
/// it makes all-punctuation tokens vanish.
#[derive(Clone, Debug, Default)]
pub struct RemoveEmptyFilter;

impl RemoveEmptyFilter {
    /// Create a new remove empty filter.
    pub fn new() -> Self {
        RemoveEmptyFilter
    }
}

impl Filter for RemoveEmptyFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        Box::new(tokens.filter(|token| !token.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_remove_empty_filter() {
        let filter = RemoveEmptyFilter::new();
        let tokens = vec![Token::new("hello", 0), Token::new("", 1), Token::new("world", 2)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
    }
}
