//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of the analysis pipeline: they split raw
//! document text into tokens that filters then normalize.
//!
//! # Examples
//!
//! ```
//! use vortex::analysis::tokenizer::Tokenizer;
//! use vortex::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// Tokenization cannot fail: every input, including the empty string,
/// produces a (possibly empty) token stream.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;
}

pub mod whitespace;
