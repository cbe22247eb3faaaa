//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};

/// A tokenizer that splits text on ASCII whitespace.
///
/// The separator set is the one of C's `isspace` in the "C" locale: space,
/// `\t`, `\n`, `\v`, `\f` and `\r`. Note that this includes vertical tab,
/// which [`char::is_ascii_whitespace`] does not. Non-ASCII whitespace such
/// as U+00A0 is treated as part of a token.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }

    /// Whether `c` separates two tokens.
    pub fn is_separator(c: char) -> bool {
        c.is_ascii_whitespace() || c == '\x0b'
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let tokens: Vec<Token> = text
            .split(Self::is_separator)
            .filter(|word| !word.is_empty())
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Box::new(tokens.into_iter())
    }
}
