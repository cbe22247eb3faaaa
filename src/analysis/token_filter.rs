//! Token filter implementations for token transformation.
//!
//! Filters receive a token stream and produce a new one. The standard
//! indexing chain is:
//!
//! ```text
//! Tokenizer → StripPunctuation → AsciiLowercase → RemoveEmpty → Index
//! ```
//!
//! # Examples
//!
//! ```
//! use vortex::analysis::token_filter::Filter;
//! use vortex::analysis::token_filter::lowercase::AsciiLowercaseFilter;
//! use vortex::analysis::token::Token;
//!
//! let filter = AsciiLowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;
}

pub mod lowercase;
pub mod remove_empty;
pub mod strip;
